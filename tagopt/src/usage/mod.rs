//! Plain-text usage rendering.

use crate::descriptor::OptionDescriptor;
use crate::registry::Registry;

const ARG_COLUMN_WIDTH: usize = 20;

fn summary_item(descriptor: &OptionDescriptor<'_>) -> String {
    let arg = descriptor.spec().arg_value();
    if descriptor.spec().required {
        arg
    } else {
        format!("[{arg}]")
    }
}

fn note(descriptor: &OptionDescriptor<'_>) -> String {
    let spec = descriptor.spec();
    if spec.required {
        return "(required)".to_owned();
    }
    let default = spec
        .default
        .as_ref()
        .map_or_else(|| descriptor.current().to_string(), ToString::to_string);
    format!("(default: \"{default}\")")
}

fn argument_line(descriptor: &OptionDescriptor<'_>) -> String {
    format!(
        "  {:<width$}: {} {}",
        descriptor.spec().arg_value(),
        descriptor.spec().help,
        note(descriptor),
        width = ARG_COLUMN_WIDTH,
    )
}

impl Registry<'_> {
    /// Renders usage text for the registered options.
    ///
    /// Options appear in registration order. Optional ones are bracketed in
    /// the summary and show their default in the argument list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagopt::Registry;
    ///
    /// let mut registry = Registry::new();
    /// let _conf = registry.string("c", "conf", "conf_file", "Config File", "conf.yaml");
    /// let _command = registry.bare_string("command", "Command To Execute");
    /// assert_eq!(
    ///     registry.usage("./app"),
    ///     "Usage:\n  ./app [-c/--conf conf_file] command\n\nArguments:\n  \
    ///      -c/--conf conf_file : Config File (default: \"conf.yaml\")\n  \
    ///      command             : Command To Execute (required)\n",
    /// );
    /// ```
    #[must_use]
    pub fn usage(&self, executable: &str) -> String {
        let summary = std::iter::once(executable.to_owned())
            .chain(self.options().iter().map(summary_item))
            .collect::<Vec<_>>()
            .join(" ");
        let lines = self
            .options()
            .iter()
            .map(argument_line)
            .collect::<Vec<_>>()
            .join("\n");
        format!("Usage:\n  {summary}\n\nArguments:\n{lines}\n")
    }
}

#[cfg(test)]
mod tests;
