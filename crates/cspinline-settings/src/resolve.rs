use crate::{model::CspinlineConfigV1, presets};
use anyhow::Context;
use cspinline_domain::policy::RulePolicy;
use cspinline_types::InlineScriptMode;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub initial_mode: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: cspinline_domain::policy::EffectiveConfig,
}

pub fn resolve_config(
    cfg: CspinlineConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());
    check_profile(&profile).context("resolve profile")?;

    let mut effective = presets::preset(&profile);
    effective.profile = profile;

    // Initial mode
    if let Some(mode_s) = overrides.initial_mode.clone().or(cfg.initial_mode.clone()) {
        effective.initial_mode = parse_mode(&mode_s).context("resolve initial_mode")?;
    }

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        let entry = effective
            .rules
            .entry(rule_id.clone())
            .or_insert_with(RulePolicy::disabled);

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
    }

    Ok(ResolvedConfig { effective })
}

// A typoed profile must not silently fall back to a preset; the chosen
// preset decides the security posture.
fn check_profile(v: &str) -> anyhow::Result<()> {
    match v {
        "strict" | "compat" => Ok(()),
        other => anyhow::bail!("unknown profile: {other} (expected strict|compat)"),
    }
}

fn parse_mode(v: &str) -> anyhow::Result<InlineScriptMode> {
    match v {
        "nonce" => Ok(InlineScriptMode::Nonce),
        "unsafe_inline" | "unsafe-inline" => Ok(InlineScriptMode::UnsafeInline),
        "unsupported" => Ok(InlineScriptMode::Unsupported),
        other => anyhow::bail!("unknown mode: {other} (expected nonce|unsafe_inline|unsupported)"),
    }
}
