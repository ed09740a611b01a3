//! Builtin architecture presets
//!
//! Used when `architectures.json` is missing or fails to parse.

use serde_json::{Map, Value};

use super::{Architecture, Catalog};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn scripts(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

/// The default catalog shipped with the tool
pub fn builtin_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.insert(
        "react-native",
        Architecture {
            name: "React Native + Expo (Mobile App)".to_string(),
            rules: strings(&[
                "expo-development.mdc",
                "react-native-testing.mdc",
                "mobile-first.mdc",
                "ui-components.mdc",
                "testing-workflow.mdc",
                "hooks.mdc",
                "code-writing-standards.mdc",
                "git-automation.mdc",
            ]),
            prompts: strings(&["workflow/execution_prompt.md"]),
            packages: strings(&["expo", "@expo/vector-icons", "nativewind"]),
            dev_dependencies: strings(&["@types/react", "@types/react-native", "jest", "eslint"]),
            scripts: scripts(&[
                ("dev", "expo start"),
                ("test", "jest"),
                ("build", "expo build"),
                ("lint", "eslint . --ext .js,.jsx,.ts,.tsx"),
            ]),
            ..Default::default()
        },
    );

    catalog.insert(
        "nextjs-fullstack",
        Architecture {
            name: "Next.js Full Stack (Web App)".to_string(),
            rules: strings(&[
                "project-structure.mdc",
                "data-fetching.mdc",
                "form-handling.mdc",
                "ui-components.mdc",
                "get-api-route.mdc",
                "testing.mdc",
                "code-writing-standards.mdc",
                "git-automation.mdc",
            ]),
            prompts: strings(&["workflow/execution_prompt.md", "workflow/PR_debug.md"]),
            packages: strings(&["next", "react", "react-dom", "@types/node"]),
            dev_dependencies: strings(&["@types/react", "@types/react-dom", "eslint", "jest"]),
            scripts: scripts(&[
                ("dev", "next dev"),
                ("build", "next build"),
                ("start", "next start"),
                ("test", "jest"),
                ("lint", "next lint"),
            ]),
            ..Default::default()
        },
    );

    catalog.insert(
        "vercel-api",
        Architecture {
            name: "Vercel Functions + Python (Backend API)".to_string(),
            rules: strings(&[
                "get-api-route.mdc",
                "environment-variables.mdc",
                "security.mdc",
                "testing.mdc",
                "code-writing-standards.mdc",
                "documentation-standards.mdc",
            ]),
            prompts: strings(&["workflow/execution_prompt.md"]),
            packages: strings(&["vercel"]),
            requirements: strings(&["fastapi", "python-multipart", "pytest", "python-dotenv"]),
            scripts: scripts(&[
                ("dev", "vercel dev"),
                ("deploy", "vercel --prod"),
                ("test", "python -m pytest"),
                ("lint", "flake8 api/"),
            ]),
            ..Default::default()
        },
    );

    catalog.insert(
        "django-api",
        Architecture {
            name: "Django REST API (Python Backend)".to_string(),
            rules: strings(&[
                "environment-variables.mdc",
                "security.mdc",
                "testing.mdc",
                "code-writing-standards.mdc",
                "documentation-standards.mdc",
                "data-fetching.mdc",
            ]),
            prompts: strings(&["workflow/execution_prompt.md"]),
            requirements: strings(&[
                "django",
                "djangorestframework",
                "django-cors-headers",
                "python-dotenv",
                "pytest-django",
            ]),
            scripts: scripts(&[
                ("dev", "python manage.py runserver"),
                ("migrate", "python manage.py migrate"),
                ("test", "python -m pytest"),
                ("lint", "flake8 ."),
                ("makemigrations", "python manage.py makemigrations"),
            ]),
            ..Default::default()
        },
    );

    catalog.insert(
        "flask-api",
        Architecture {
            name: "Flask API (Python Backend)".to_string(),
            rules: strings(&[
                "environment-variables.mdc",
                "security.mdc",
                "testing.mdc",
                "code-writing-standards.mdc",
                "documentation-standards.mdc",
            ]),
            prompts: strings(&["workflow/execution_prompt.md"]),
            requirements: strings(&["flask", "flask-cors", "python-dotenv", "pytest", "gunicorn"]),
            scripts: scripts(&[
                ("dev", "flask run --debug"),
                ("test", "python -m pytest"),
                ("lint", "flake8 ."),
                ("start", "gunicorn app:app"),
            ]),
            ..Default::default()
        },
    );

    catalog.insert(
        "fastapi",
        Architecture {
            name: "FastAPI (Modern Python API)".to_string(),
            rules: strings(&[
                "environment-variables.mdc",
                "security.mdc",
                "testing.mdc",
                "code-writing-standards.mdc",
                "documentation-standards.mdc",
            ]),
            prompts: strings(&["workflow/execution_prompt.md"]),
            requirements: strings(&[
                "fastapi",
                "uvicorn",
                "python-multipart",
                "python-dotenv",
                "pytest",
                "httpx",
            ]),
            scripts: scripts(&[
                ("dev", "uvicorn main:app --reload"),
                ("test", "python -m pytest"),
                ("lint", "flake8 ."),
                ("start", "uvicorn main:app --host 0.0.0.0 --port 8000"),
            ]),
            ..Default::default()
        },
    );

    catalog.insert("custom", Architecture::custom());

    catalog
}
