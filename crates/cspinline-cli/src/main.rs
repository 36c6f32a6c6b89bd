//! CLI entry point for cspinline.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `cspinline-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use cspinline_app::{
    DecideInput, DecideOutput, ExplainOutput, generate_nonce, render_inline_script,
    render_script_src, render_trace_summary, run_decide, run_explain, serialize_report,
    to_renderable,
};
use cspinline_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "cspinline",
    version,
    about = "Per-request CSP inline-script mode decision"
)]
struct Cli {
    /// Path to cspinline config TOML.
    #[arg(long, default_value = "cspinline.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|compat).
    #[arg(long)]
    profile: Option<String>,

    /// Override the candidate mode the chain starts from.
    #[arg(long)]
    initial_mode: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide the inline-script mode for a client and print it.
    Decide {
        /// The requesting client's User-Agent header.
        #[arg(long)]
        user_agent: String,

        /// Where to write the JSON decision report (optional).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Print the downgrade trace after the mode.
        #[arg(long)]
        trace: bool,
    },

    /// Print the script-src source expression for a client.
    Header {
        /// The requesting client's User-Agent header.
        #[arg(long)]
        user_agent: String,

        /// Nonce to embed; freshly generated when omitted.
        #[arg(long)]
        nonce: Option<String>,
    },

    /// Emit an inline script element for a client. Exits 2 when inline
    /// script is unsupported and the body must be externalized.
    Script {
        /// The requesting client's User-Agent header.
        #[arg(long)]
        user_agent: String,

        /// Script body to wrap.
        #[arg(long)]
        body: String,

        /// Nonce to embed; freshly generated when omitted.
        #[arg(long)]
        nonce: Option<String>,
    },

    /// Explain a rule_id or trace code.
    Explain {
        /// The rule_id (e.g., "client.ie_family") or code (e.g.,
        /// "ie_detected") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Decide {
            ref user_agent,
            ref report_out,
            trace,
        } => cmd_decide(&cli, user_agent.clone(), report_out.clone(), trace),
        Commands::Header {
            ref user_agent,
            ref nonce,
        } => cmd_header(&cli, user_agent.clone(), nonce.clone()),
        Commands::Script {
            ref user_agent,
            ref body,
            ref nonce,
        } => cmd_script(&cli, user_agent.clone(), body.clone(), nonce.clone()),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn decide_for(cli: &Cli, user_agent: &str) -> anyhow::Result<DecideOutput> {
    // Load config if present; a missing file is allowed (defaults apply).
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let overrides = Overrides {
        profile: cli.profile.clone(),
        initial_mode: cli.initial_mode.clone(),
    };

    run_decide(DecideInput {
        user_agent: Some(user_agent),
        config_text: &cfg_text,
        overrides,
    })
}

fn cmd_decide(
    cli: &Cli,
    user_agent: String,
    report_out: Option<Utf8PathBuf>,
    trace: bool,
) -> anyhow::Result<()> {
    let output = decide_for(cli, &user_agent)?;

    println!("{}", output.report.mode);

    if trace {
        let renderable = to_renderable(&output.report);
        print!("{}", render_trace_summary(&renderable));
    }

    if let Some(path) = report_out {
        write_report_file(&path, &output).context("write report json")?;
    }

    Ok(())
}

fn cmd_header(cli: &Cli, user_agent: String, nonce: Option<String>) -> anyhow::Result<()> {
    let output = decide_for(cli, &user_agent)?;
    let renderable = to_renderable(&output.report);

    let nonce = nonce.unwrap_or_else(generate_nonce);
    if let Some(source) = render_script_src(&renderable, &nonce) {
        println!("{}", source);
    }

    Ok(())
}

fn cmd_script(
    cli: &Cli,
    user_agent: String,
    body: String,
    nonce: Option<String>,
) -> anyhow::Result<()> {
    let output = decide_for(cli, &user_agent)?;
    let renderable = to_renderable(&output.report);

    let nonce = nonce.unwrap_or_else(generate_nonce);
    match render_inline_script(&renderable, &nonce, &body) {
        Some(element) => {
            println!("{}", element);
            Ok(())
        }
        None => {
            eprintln!("cspinline: inline script unsupported for this client; externalize it");
            std::process::exit(2);
        }
    }
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", cspinline_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                cspinline_app::format_not_found(&identifier, available_rule_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &camino::Utf8Path, output: &DecideOutput) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(&output.report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}
