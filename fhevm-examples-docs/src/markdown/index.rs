//! Aggregate examples document.
//!
//! One section per category, in order of first appearance, each holding a
//! subsection per parsed contract.

use fhevm_examples_core::naming::capitalize;

use crate::scan::ParsedExample;

/// Heading of the aggregate document.
pub const DOC_TITLE: &str = "# FHEVM Examples Documentation";

/// Render the aggregate Markdown document for `examples`.
#[must_use]
pub fn render_examples_doc(examples: &[ParsedExample]) -> String {
    let mut markdown = format!("{DOC_TITLE}\n\n");
    markdown.push_str("Auto-generated documentation for FHEVM example projects.\n\n");

    for category in categories_in_order(examples) {
        markdown.push_str(&format!("## {} Examples\n\n", capitalize(category)));

        for example in examples.iter().filter(|e| e.category == category) {
            render_example(&mut markdown, example);
        }
    }

    markdown
}

/// Distinct categories in order of first appearance.
fn categories_in_order(examples: &[ParsedExample]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for example in examples {
        if !categories.contains(&example.category.as_str()) {
            categories.push(&example.category);
        }
    }
    categories
}

fn render_example(markdown: &mut String, example: &ParsedExample) {
    let name = &example.name;
    markdown.push_str(&format!("### {}\n\n", example.title));
    markdown.push_str(&format!("**Location**: `examples/{name}/`\n\n"));
    markdown.push_str(&format!("**Description**: {}\n\n", example.description));
    markdown.push_str(&format!("**Chapter**: {}\n\n", example.chapter));

    markdown.push_str("#### Setup\n\n");
    markdown.push_str("```bash\n");
    markdown.push_str(&format!("cd examples/{name}\n"));
    markdown.push_str("npm install\n");
    markdown.push_str("npm run test\n");
    markdown.push_str("```\n\n");

    markdown.push_str("#### Files\n\n");
    markdown.push_str("- `contracts/` - Smart contract source code\n");
    markdown.push_str("- `test/` - Test suite\n");
    markdown.push_str("- `README.md` - Example-specific documentation\n\n");
}
