mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resourcekey::{builtin_api_versions, ResourceKey};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Canonical keys of kubernetes objects")]
struct Opts {
    #[command(subcommand)]
    sub: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Print keys of objects found in manifests, stdin is read if no files given
    Key {
        /// Skip objects with non-builtin api versions
        #[arg(long)]
        builtin_only: bool,
        files: Vec<PathBuf>,
    },
    /// Decode keys, and print their fields
    Decode {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// List api versions, which are considered builtin
    Builtins,
}

fn describe(key: &ResourceKey) -> String {
    let mut out = format!(
        "{}\n\tapiVersion: {}\n\tkind: {}\n\tnamespace: {}\n\tname: {}\n\tbuiltin: {}",
        key,
        key.api_version,
        key.kind,
        key.namespace,
        key.name,
        key.is_kubernetes_builtin_resource(),
    );
    if key.is_deployment() {
        out.push_str("\n\tis: deployment");
    } else if key.is_config_map() {
        out.push_str("\n\tis: config map");
    } else if key.is_secret() {
        out.push_str("\n\tis: secret");
    }
    out
}

fn print_keys(files: &[PathBuf], builtin_only: bool) -> Result<()> {
    let mut documents = Vec::new();
    if files.is_empty() {
        documents.extend(input::load(None)?);
    }
    for file in files {
        documents.extend(input::load(Some(file.as_path()))?);
    }

    for obj in input::flatten(documents) {
        let key = ResourceKey::from(&obj);
        if key.is_zero() {
            log::warn!("object has no apiVersion, kind, namespace or name, skipping");
            continue;
        }
        if builtin_only && !key.is_kubernetes_builtin_resource() {
            log::debug!("skipping non-builtin {}", key);
            continue;
        }
        println!("{}", key);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts: Opts = Opts::parse();

    match opts.sub {
        SubCommand::Key {
            builtin_only,
            files,
        } => print_keys(&files, builtin_only)?,
        SubCommand::Decode { keys } => {
            for key in keys {
                let decoded = ResourceKey::decode(&key).context("failed to decode key")?;
                println!("{}", describe(&decoded));
            }
        }
        SubCommand::Builtins => {
            for api_version in builtin_api_versions() {
                println!("{}", api_version);
            }
        }
    }
    Ok(())
}
