use clap::Parser;

mod cli;
mod conf;
mod domain;
mod services;

use cli::{Cli, Commands};
use conf::DocConfig;
use domain::models::{CheckItem, ExtensionRow, ThemeOption, ThemeReport, ValidateReport};
use services::output::{emit, emit_rows};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { force } => {
            if std::path::Path::new(&cli.conf).exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", cli.conf);
            }
            conf::save(&cli.conf, &conf::sample())?;
            emit(cli.json, cli.conf.clone(), |p| format!("wrote {}", p))?;
        }
        Commands::Show => {
            let c = conf::load(&cli.conf)?;
            emit(cli.json, c, render_conf)?;
        }
        Commands::Validate => {
            let c = conf::load(&cli.conf)?;
            conf::validate(&c)?;
            let report = ValidateReport {
                overall: "ok".to_string(),
                checks: validate_checks(&c),
            };
            emit(cli.json, report, |_| "config valid".to_string())?;
        }
        Commands::Extensions => {
            let c = conf::load(&cli.conf)?;
            let rows: Vec<ExtensionRow> = c
                .extensions
                .iter()
                .enumerate()
                .map(|(position, id)| ExtensionRow {
                    position,
                    id: id.clone(),
                })
                .collect();
            emit_rows(cli.json, &rows, |e| format!("{}\t{}", e.position, e.id))?;
        }
        Commands::Theme => {
            let c = conf::load(&cli.conf)?;
            let report = ThemeReport {
                html_theme: c.html_theme.clone(),
                options: c
                    .html_theme_options
                    .iter()
                    .map(|(key, value)| ThemeOption {
                        key: key.clone(),
                        value: value.clone(),
                    })
                    .collect(),
            };
            emit(cli.json, report, render_theme)?;
        }
    }

    Ok(())
}

fn render_conf(c: &DocConfig) -> String {
    let mut lines = vec![
        format!("project: {}", c.project),
        format!("copyright: {}", c.copyright),
        format!("author: {}", c.author),
        format!("version: {}", c.version),
        format!("release: {}", c.release),
        format!("extensions: {}", c.extensions.join(", ")),
        format!(
            "html_theme: {}",
            c.html_theme.as_deref().unwrap_or("n/a")
        ),
    ];
    for (key, value) in &c.html_theme_options {
        lines.push(format!("html_theme_options.{}: {}", key, value));
    }
    lines.push(format!(
        "primary_domain: {}",
        c.primary_domain.as_deref().unwrap_or("n/a")
    ));
    lines.join("\n")
}

fn render_theme(r: &ThemeReport) -> String {
    let mut lines = vec![format!(
        "theme: {}",
        r.html_theme.as_deref().unwrap_or("n/a")
    )];
    for o in &r.options {
        lines.push(format!("{} = {}", o.key, o.value));
    }
    lines.join("\n")
}

fn validate_checks(c: &DocConfig) -> Vec<CheckItem> {
    let mut checks: Vec<CheckItem> = ["project", "copyright", "author", "version", "release"]
        .iter()
        .map(|name| CheckItem {
            name: format!("{}_non_empty", name),
            status: "ok".to_string(),
        })
        .collect();
    for (name, present) in [
        ("html_theme", c.html_theme.is_some()),
        ("primary_domain", c.primary_domain.is_some()),
    ] {
        if present {
            checks.push(CheckItem {
                name: format!("{}_non_empty", name),
                status: "ok".to_string(),
            });
        }
    }
    checks.push(CheckItem {
        name: "extensions_unique".to_string(),
        status: "ok".to_string(),
    });
    checks
}
