//! Per-example README generated from a contract's annotations.

use crate::annotation::ParsedAnnotation;

/// Render the README for an example whose main contract is `contract_file`.
#[must_use]
pub fn render_example_readme(docs: &ParsedAnnotation, contract_file: &str) -> String {
    let mut sections = Vec::new();

    sections.push(format!("# {}", docs.title));
    sections.push(String::new());
    sections.push(docs.description.clone());
    sections.push(String::new());

    sections.push("## Overview".to_string());
    sections.push(String::new());
    sections.push(format!(
        "This example demonstrates FHEVM concepts in the \"{}\" category.",
        docs.chapter
    ));
    sections.push(String::new());

    sections.push("## Setup".to_string());
    sections.push(String::new());
    sections.push("```bash".to_string());
    sections.push("npm install".to_string());
    sections.push("npm run compile".to_string());
    sections.push("npm run test".to_string());
    sections.push("```".to_string());
    sections.push(String::new());

    sections.push("## Contract Details".to_string());
    sections.push(String::new());
    sections.push(format!("Main contract: `{contract_file}`"));
    sections.push(String::new());

    sections.push("## Key Concepts".to_string());
    sections.push(String::new());
    sections.push("- FHEVM encryption and operations".to_string());
    sections.push("- Secure smart contract development".to_string());
    sections.push("- Privacy-preserving logic".to_string());
    sections.push(String::new());

    sections.push("## Testing".to_string());
    sections.push(String::new());
    sections.push("```bash".to_string());
    sections.push("npm run test".to_string());
    sections.push("npm run test:coverage".to_string());
    sections.push("```".to_string());
    sections.push(String::new());

    sections.push("## References".to_string());
    sections.push(String::new());
    sections.push("- [Zama FHEVM Documentation](https://docs.zama.ai/)".to_string());
    sections.push("- [Solidity Documentation](https://docs.soliditylang.org/)".to_string());
    sections.push(String::new());

    sections.join("\n")
}
