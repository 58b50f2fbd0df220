use crate::adapters::outbound::formatters::{JsonTreeFormatter, TextTreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TreeFormatter;

/// Factory for creating tree formatters
///
/// It belongs in the application layer as it selects infrastructure
/// adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `colored` - Whether the text tree may use terminal colours
    ///
    /// # Examples
    /// ```
    /// use component_tree::application::dto::OutputFormat;
    /// use component_tree::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn TreeFormatter> {
        match format {
            OutputFormat::Tree => Box::new(TextTreeFormatter::new(colored)),
            OutputFormat::Json => Box::new(JsonTreeFormatter::new()),
        }
    }
}
