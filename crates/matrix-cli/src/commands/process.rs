use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use matrix_app::types::api::ProcessMatrixRequest;
use matrix_app::{Config, MatrixApp};

pub async fn run(config: Config, input: &Path, token: Option<&str>) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Input file not found: {}", input.display()))?;
    let request: ProcessMatrixRequest = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", input.display()))?;

    let output = match token {
        Some(token) => {
            let app = MatrixApp::new(config)?;
            let outcome = app.pipeline().process(request.matrix, token).await?;
            if let Some(note) = &outcome.error {
                eprintln!("{} {}", "!".yellow(), note);
            }
            serde_json::to_value(&outcome)?
        }
        None => {
            let transformed = matrix_app::services::transform(request.matrix)?;
            serde_json::json!({
                "rotated": transformed.rotated,
                "q": transformed.q,
                "r": transformed.r,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
