//! Embedded file templates
//!
//! These are compiled into the binary and rendered with handlebars when the
//! corresponding file is generated.

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;

/// README.md template rendered at the end of setup
pub const README: &str = r#"# {{project_name}}

Quick-started MVP using **{{architecture_name}}** architecture.

## Architecture

This project was set up using the MVP Quick-Start Template with the following configuration:

### Active Rules
{{#each rules}}- {{this}}
{{/each}}
{{#if has_scripts}}
### Development Commands

{{#each scripts}}- **{{name}}**: `npm run {{name}}` - {{command}}
{{/each}}
{{/if}}
## Getting Started

1. Set up environment variables:
   ```bash
   cp .env.example .env
   # Edit .env with your actual values
   ```

2. Install dependencies:
   {{install_section}}

3. Start development:
   ```bash
   npm run dev
   ```

4. Run tests:
   ```bash
   npm run test
   ```

## Project Structure

```
{{slug}}/
├── .cursorrules          # Consolidated Cursor rules
├── active_prompts/       # Development workflow prompts
├── package.json          # Node.js dependencies and scripts
{{#if has_requirements}}├── requirements.txt      # Python dependencies
{{/if}}├── README.md            # This file
└── src/                  # Your source code goes here
```

## Active Prompts

Check the `active_prompts/` directory for development workflow prompts that work with this architecture:

- **Execution Prompt**: Structured TDD workflow for feature development
- **PR Debug Prompt**: Systematic debugging and code review process

## Cursor Rules

All relevant Cursor rules have been consolidated into `.cursorrules`. These provide:
- 📝 Code standards and patterns
- 🧪 Testing guidelines
- 🔄 Git workflow automation
- 🏗️ Architecture-specific best practices
- 🛡️ Security practices

## Development Workflow

1. **Plan Feature**: Use active prompts to structure your approach
2. **Write Tests**: Follow TDD patterns from execution prompt
3. **Implement**: Build with guidance from Cursor rules
4. **Test & Review**: Use testing guidelines and PR debug process
5. **Deploy**: Use architecture-specific deployment commands

---

*Generated with MVP Quick-Start Template*
"#;

/// FastAPI starter written as `main.py`
pub const FASTAPI_MAIN: &str = r#"from fastapi import FastAPI
from fastapi.middleware.cors import CORSMiddleware

app = FastAPI(title="{{project_name}}", version="0.1.0")

app.add_middleware(
    CORSMiddleware,
    allow_origins=["*"],
    allow_credentials=True,
    allow_methods=["*"],
    allow_headers=["*"],
)

@app.get("/")
async def root():
    return {"message": "Hello from {{project_name}} API!"}

@app.get("/health")
async def health_check():
    return {"status": "healthy"}
"#;

/// Flask starter written as `app.py`
pub const FLASK_APP: &str = r#"from flask import Flask, jsonify
from flask_cors import CORS

app = Flask(__name__)
CORS(app)

@app.route('/')
def root():
    return jsonify({"message": "Hello from {{project_name}} API!"})

@app.route('/health')
def health_check():
    return jsonify({"status": "healthy"})

if __name__ == '__main__':
    app.run(debug=True)
"#;

/// PRD template dropped into `.taskmaster/docs/`
pub const PRD_TEMPLATE: &str = r#"# Product Requirements Document (PRD)

## Product Overview
- **Product Name**: [Your MVP Name]
- **Vision**: [One sentence describing what this product does]
- **Target Users**: [Who will use this product]

## Core Features
1. **Feature 1**: [Description of primary feature]
2. **Feature 2**: [Description of secondary feature]
3. **Feature 3**: [Description of additional feature]

## Technical Requirements
- **Platform**: [Web/Mobile/Desktop]
- **Performance**: [Speed, scalability requirements]
- **Security**: [Authentication, data protection needs]
- **Integrations**: [External APIs, services needed]

## Success Criteria
- **User Metrics**: [What makes users successful]
- **Business Metrics**: [What makes the business successful]
- **Technical Metrics**: [Performance benchmarks]

## Timeline & Constraints
- **MVP Timeline**: [Target completion date]
- **Budget Constraints**: [Development resources available]
- **Technical Constraints**: [Specific technology requirements]
"#;

/// README dropped into `.taskmaster/context/`
pub const TASK_CONTEXT_README: &str = r#"# Task Context Documents

This directory contains detailed context documents for each task generated from your PRD.

## Using Task Context
1. Each task has a corresponding context document: `task_XX_context.md`
2. Subtasks have their own context: `task_XX_subtask_YY_context.md`
3. Context documents include implementation guidelines, testing strategies, and success criteria

## Generating Task Context
After parsing your PRD with `task-master parse-prd`, generate context documents
for each task from the task context template.

## Context Document Structure
- **Task Overview**: Objective, business value, user impact
- **Success Criteria**: Functional requirements, acceptance criteria
- **Technical Context**: Architecture integration, dependencies
- **Implementation Guidelines**: Step-by-step approach
- **Testing Strategy**: Unit, integration, E2E tests
- **Success/Failure States**: What done looks like
"#;

/// Render an embedded template with the given context
///
/// Output is Markdown or Python, never HTML, so escaping is disabled.
pub fn render<C: Serialize>(template: &str, context: &C) -> Result<String> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(handlebars::no_escape);
    hbs.render_template(template, context)
        .map_err(|e| eyre!("Failed to render template: {e}"))
}
