//! Contents of generated files.
//!
//! JSON files are rendered from serde structs so field order is fixed by the
//! struct definition; text files are plain templates.

use std::collections::BTreeMap;

use serde::Serialize;

use fhevm_examples_core::config::{CategoryConfig, ExampleConfig};
use fhevm_examples_core::naming;

use crate::error::ScaffoldError;

/// Environment template written into category examples.
pub const CATEGORY_ENV_TEMPLATE: &str = "\
SEPOLIA_RPC_URL=https://sepolia.infura.io/v3/YOUR_KEY
PRIVATE_KEY=0xYOUR_PRIVATE_KEY
";

/// Environment template written by the single-example generator.
pub const PROJECT_ENV_TEMPLATE: &str = "\
SEPOLIA_RPC_URL=https://sepolia.infura.io/v3/YOUR_KEY
PRIVATE_KEY=0xYOUR_PRIVATE_KEY
ETHERSCAN_API_KEY=YOUR_ETHERSCAN_KEY
";

/// Ignore rules written by the single-example generator.
pub const GITIGNORE: &str = "\
node_modules/
dist/
build/
artifacts/
cache/
.env
.env.local
*.log
";

// ============================================================================
// package.json
// ============================================================================

/// npm package manifest for a category example.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// `fhevm-example-<name>`
    pub name: String,
    /// Package version
    pub version: &'static str,
    /// Example description
    pub description: String,
    /// npm scripts
    pub scripts: ManifestScripts,
    /// Runtime dependencies
    pub dependencies: BTreeMap<&'static str, &'static str>,
    /// Development dependencies
    pub dev_dependencies: BTreeMap<&'static str, &'static str>,
}

/// npm scripts of a category example.
#[derive(Debug, Serialize)]
pub struct ManifestScripts {
    /// Compile contracts
    pub compile: &'static str,
    /// Run the test suite
    pub test: &'static str,
    /// Deploy to the default network
    pub deploy: &'static str,
    /// Deploy to Sepolia
    #[serde(rename = "deploy:sepolia")]
    pub deploy_sepolia: &'static str,
}

impl PackageManifest {
    /// Manifest for the example `name`.
    #[must_use]
    pub fn for_example(name: &str, description: &str) -> Self {
        Self {
            name: naming::package_name(name),
            version: "1.0.0",
            description: description.to_string(),
            scripts: ManifestScripts {
                compile: "hardhat compile",
                test: "hardhat test",
                deploy: "hardhat run scripts/deploy.ts",
                deploy_sepolia: "hardhat run scripts/deploy.ts --network sepolia",
            },
            dependencies: BTreeMap::from([("@fhevm/solidity", "^1.0.0"), ("ethers", "^6.8.0")]),
            dev_dependencies: BTreeMap::from([
                ("@nomicfoundation/hardhat-toolbox", "^3.0.0"),
                ("hardhat", "^2.17.0"),
                ("typescript", "^5.2.0"),
            ]),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ScaffoldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// tsconfig.json
// ============================================================================

/// TypeScript project configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    /// Compiler options
    pub compiler_options: CompilerOptions,
    /// Included globs
    pub include: Vec<&'static str>,
    /// Excluded globs
    pub exclude: Vec<&'static str>,
}

/// `compilerOptions` block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct CompilerOptions {
    pub target: &'static str,
    pub module: &'static str,
    pub lib: Vec<&'static str>,
    pub out_dir: &'static str,
    pub root_dir: &'static str,
    pub strict: bool,
    pub es_module_interop: bool,
    pub skip_lib_check: bool,
    pub force_consistent_casing_in_file_names: bool,
}

impl Default for TsConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions {
                target: "ES2020",
                module: "commonjs",
                lib: vec!["ES2020"],
                out_dir: "./dist",
                root_dir: "./",
                strict: true,
                es_module_interop: true,
                skip_lib_check: true,
                force_consistent_casing_in_file_names: true,
            },
            include: vec!["scripts/**/*.ts", "test/**/*.ts"],
            exclude: vec!["node_modules"],
        }
    }
}

impl TsConfig {
    /// Pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ScaffoldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// READMEs
// ============================================================================

/// README of one example inside a category.
#[must_use]
pub fn example_readme(name: &str, description: &str) -> String {
    let title = naming::display_title(name);
    format!(
        r"# {title}

{description}

## Setup

```bash
npm install
npm run compile
npm run test
```

## Key Concepts

This example demonstrates:
- FHEVM encryption
- Smart contract patterns
- Test-driven development

## Deployment

```bash
npm run deploy:sepolia
```

## Documentation

See parent directory README for category overview.
"
    )
}

/// README at the root of a category directory.
#[must_use]
pub fn category_readme(category: &CategoryConfig) -> String {
    let mut markdown = format!("# {}\n\n{}\n\n## Examples\n\n", category.title, category.description);

    for example in &category.examples {
        markdown.push_str(&format!(
            "### {name}\n{description}\n\n```bash\ncd {name}\nnpm install\nnpm run test\n```\n\n",
            name = example.name,
            description = example.description,
        ));
    }

    markdown.push_str("## Resources\n\n");
    markdown.push_str("- [Zama FHEVM Docs](https://docs.zama.ai/)\n");
    markdown.push_str("- [Solidity Docs](https://docs.soliditylang.org/)\n");
    markdown
}

/// README of a project created by the single-example generator.
#[must_use]
pub fn project_readme(config: &ExampleConfig) -> String {
    let ExampleConfig {
        name,
        description,
        category,
        contract_name,
        ..
    } = config;

    format!(
        r"# {name}

**Category**: {category}
**Description**: {description}

## Setup

```bash
npm install
npm run compile
npm run test
```

## Example

This example demonstrates:
- {description}

## Key Concepts

- FHEVM encryption
- Smart contract functions
- Test-driven development

## Files

- `contracts/{contract_name}.sol` - Main contract
- `test/{contract_name}.test.ts` - Test suite

## Next Steps

1. Review the contract implementation
2. Run tests to verify functionality
3. Deploy to Sepolia testnet
4. Extend with your own features

## References

- Zama FHEVM Documentation: https://docs.zama.ai/
- Solidity Docs: https://docs.soliditylang.org/
"
    )
}
