//! Req command implementation.
//!
//! Builds a filter from the selector flags and prints it, either bare or
//! wrapped in a `["REQ", "nak", ...]` message.

use nostr_filter::{render, Filter, OutputMode, Selectors, Timestamp};

use super::config::{load_config, Config};
use super::{CommandContext, Result};
use crate::cli::ReqArgs;

/// Executes the req command.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read.
pub fn execute(ctx: &CommandContext, args: &ReqArgs) -> Result<()> {
    let config = load_config()?;
    let mode = resolve_mode(args.bare, &config);

    let selectors = to_selectors(args);
    let filter = selectors.build();

    if ctx.verbose {
        log_filter(&selectors, &filter, mode);
    }

    println!("{}", render(&filter, mode)?);
    Ok(())
}

/// Copies the parsed flags into library selectors.
fn to_selectors(args: &ReqArgs) -> Selectors {
    Selectors {
        authors: args.authors.clone(),
        ids: args.ids.clone(),
        kinds: args.kinds.clone(),
        tags: args.tags.clone(),
        event_tags: args.event_tags.clone(),
        pubkey_tags: args.pubkey_tags.clone(),
        since: args.since,
        until: args.until,
        limit: args.limit,
    }
}

/// `--bare` wins; otherwise the config default; otherwise enveloped.
fn resolve_mode(bare_flag: bool, config: &Config) -> OutputMode {
    if bare_flag {
        OutputMode::Bare
    } else {
        OutputMode::from_bare(config.req.bare.unwrap_or(false))
    }
}

/// Prints what went into the filter to stderr.
fn log_filter(selectors: &Selectors, filter: &Filter, mode: OutputMode) {
    for raw in selectors.rejected_tags() {
        eprintln!("Ignoring tag '{}': expected <single character>=<value>", raw);
    }

    if filter.is_empty() {
        eprintln!("Filter has no restrictions: every event matches");
    }

    if let Some(tags) = &filter.tags {
        for (name, values) in tags.iter() {
            eprintln!("Tag #{}: {} value(s)", name, values.len());
        }
    }

    log_bound("since", filter.since);
    log_bound("until", filter.until);

    if let Some(limit) = filter.limit {
        eprintln!("Limit: {}", limit);
    }

    eprintln!("Output mode: {:?}", mode);
}

fn log_bound(label: &str, bound: Option<Timestamp>) {
    let Some(ts) = bound else {
        return;
    };
    match ts.to_datetime() {
        Some(dt) => eprintln!("{}: {} ({})", label, ts, dt.format("%Y-%m-%d %H:%M:%S UTC")),
        None => eprintln!("{}: {}", label, ts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::ReqConfig;

    fn config_with_bare(bare: Option<bool>) -> Config {
        Config {
            req: ReqConfig { bare },
            ..Config::default()
        }
    }

    #[test]
    fn test_to_selectors_copies_every_flag() {
        let args = ReqArgs {
            authors: vec!["a".into()],
            ids: vec!["i".into()],
            kinds: vec![1],
            tags: vec!["t=x".into()],
            event_tags: vec!["e".into()],
            pubkey_tags: vec!["p".into()],
            since: Some(1),
            until: Some(2),
            limit: Some(3),
            bare: true,
        };
        let selectors = to_selectors(&args);

        assert_eq!(selectors.authors, vec!["a"]);
        assert_eq!(selectors.ids, vec!["i"]);
        assert_eq!(selectors.kinds, vec![1]);
        assert_eq!(selectors.tags, vec!["t=x"]);
        assert_eq!(selectors.event_tags, vec!["e"]);
        assert_eq!(selectors.pubkey_tags, vec!["p"]);
        assert_eq!(selectors.since, Some(1));
        assert_eq!(selectors.until, Some(2));
        assert_eq!(selectors.limit, Some(3));
    }

    #[test]
    fn test_resolve_mode_flag_wins() {
        let config = config_with_bare(Some(false));
        assert_eq!(resolve_mode(true, &config), OutputMode::Bare);
    }

    #[test]
    fn test_resolve_mode_uses_config_default() {
        assert_eq!(
            resolve_mode(false, &config_with_bare(Some(true))),
            OutputMode::Bare
        );
        assert_eq!(
            resolve_mode(false, &config_with_bare(Some(false))),
            OutputMode::Enveloped
        );
    }

    #[test]
    fn test_resolve_mode_defaults_to_enveloped() {
        assert_eq!(
            resolve_mode(false, &config_with_bare(None)),
            OutputMode::Enveloped
        );
    }

    #[test]
    fn test_default_args_render_empty_req() {
        let filter = to_selectors(&ReqArgs::default()).build();
        let mode = resolve_mode(false, &Config::default());
        assert_eq!(render(&filter, mode).unwrap(), r#"["REQ","nak",{}]"#);
    }
}
