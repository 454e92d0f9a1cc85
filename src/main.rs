// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::{bail, Context, Result};
use datanode::config::{load_and_validate_config, NodeRegistry};
use tracing_subscriber::EnvFilter;

fn parse_values(raw: &[String]) -> Result<Vec<f64>> {
    raw.iter()
        .map(|value| {
            let parsed = value
                .trim()
                .parse::<f64>()
                .with_context(|| format!("'{}' is not a number", value))?;
            if !parsed.is_finite() {
                bail!("'{}' is not a finite number", value);
            }
            Ok(parsed)
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <config.yaml|config.toml> [value ...]", args[0]);
        eprintln!("Example: {} configs/nodes.yaml 5 2 9", args[0]);
        bail!("missing configuration file");
    }

    let config_file = &args[1];
    let values = parse_values(&args[2..])?;

    let config = load_and_validate_config(config_file)
        .with_context(|| format!("failed to load {}", config_file))?;
    let mut registry = NodeRegistry::from_config(&config)
        .with_context(|| format!("failed to build nodes from {}", config_file))?;

    registry.add_to_all(values.iter().copied());

    for summary in registry.summaries() {
        let line = serde_json::to_string(&summary)
            .with_context(|| format!("failed to serialize node '{}'", summary.name))?;
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        let raw = vec!["5".to_string(), " 2.5 ".to_string(), "-1e2".to_string()];
        assert_eq!(parse_values(&raw).unwrap(), vec![5.0, 2.5, -100.0]);
    }

    #[test]
    fn test_parse_values_rejects_text() {
        let raw = vec!["5".to_string(), "five".to_string()];
        let error = parse_values(&raw).unwrap_err();
        assert!(error.to_string().contains("'five'"));
    }

    #[test]
    fn test_parse_values_rejects_non_finite() {
        for raw in ["NaN", "inf", "-infinity"] {
            let error = parse_values(&[raw.to_string()]).unwrap_err();
            assert!(error.to_string().contains("not a finite number"), "{}", raw);
        }
    }
}
