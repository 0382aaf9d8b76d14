//! Local debug entry point for the prompt-to-Flutter pipeline.
//!
//! Usage: `prompt-pipeline <manifest.json> <prompt...>`
//!
//! Loads a serialized [`project_manifest::FileManifest`], classifies the
//! prompt, and — for Flutter creation intents — renders candidate code and
//! validates it. The report is printed as JSON on stdout.

use std::error::Error;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional for local runs
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: prompt-pipeline <manifest.json> <prompt...>");
        std::process::exit(2);
    }

    let report = pipeline::run(&args[0], &args[1..].join(" "))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

mod pipeline {
    use anyhow::{Context, Result};
    use dart_validator::validate;
    use edit_intent::{EditType, classify};
    use flutter_codegen::{FlutterCodeGenerator, ProjectKind};
    use project_manifest::FileManifest;
    use serde_json::{Value, json};
    use std::fs;
    use tracing::info;

    /// Classify, and for Flutter creation intents generate + validate.
    pub fn run(manifest_path: &str, prompt: &str) -> Result<Value> {
        // 1. Load the manifest snapshot
        let text = fs::read_to_string(manifest_path)
            .with_context(|| format!("reading manifest {manifest_path}"))?;
        let manifest: FileManifest =
            serde_json::from_str(&text).context("parsing manifest JSON")?;
        manifest.validate().context("manifest invariants")?;
        info!(files = manifest.files.len(), "Loaded manifest");

        // 2. Classify the prompt
        let intent = classify(prompt, &manifest);
        info!(
            edit_type = %intent.edit_type,
            targets = intent.target_files.len(),
            confidence = intent.confidence,
            "Classified prompt"
        );

        // 3. For Flutter creation intents, render and validate candidate code
        let flutter_creation = matches!(
            intent.edit_type,
            EditType::CreateFlutterWidget | EditType::CreateFlutterScreen
        );
        if !flutter_creation {
            return Ok(json!({ "intent": intent }));
        }

        let generator = FlutterCodeGenerator::default();
        let code = generator.generate_flutter_code_from_prompt(prompt, ProjectKind::Flutter)?;
        let validation = validate(&code);
        info!(
            valid = validation.is_valid,
            errors = validation.errors.len(),
            warnings = validation.warnings.len(),
            "Validated generated code"
        );

        Ok(json!({
            "intent": intent,
            "generated_code": code,
            "validation": validation,
        }))
    }
}
