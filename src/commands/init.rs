use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Smellmap configuration

# How control nesting inside nested `def`s counts toward the enclosing
# function's depth: "accumulate" or "isolate".
nested_scopes = "accumulate"

# Fan out per-file analysis across threads.
parallel = true

[thresholds]
max_function_length = 50
function_length_high = 100
max_parameters = 5
parameters_high = 7
max_nesting = 4
nesting_high = 5

[ignore]
patterns = [
    "venv/**",
    ".venv/**",
    "**/site-packages/**",
]
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
