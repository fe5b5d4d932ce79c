//! Implementation of the `patchsub rules` command.

use crate::cli::RulesArgs;
use crate::config::Config;
use crate::error::Result;

/// Execute the `patchsub rules` command.
pub fn cmd_rules(args: RulesArgs) -> Result<()> {
    let config = Config::load_or_default(args.rules.as_deref())?;
    print!("{}", render_rules(&config));
    Ok(())
}

/// The rules in application order, followed by the output suffix.
pub(crate) fn render_rules(config: &Config) -> String {
    if config.rules.is_empty() {
        return "No rules configured.\n".to_string();
    }

    let mut out = String::new();
    for (index, rule) in config.rules.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:?} -> {:?}\n",
            index + 1,
            rule.pattern,
            rule.replacement
        ));
    }
    out.push('\n');
    out.push_str(&format!("Output suffix: {}\n", config.output_suffix));
    out
}
