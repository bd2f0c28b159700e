use std::error::Error;

/// Label in front of the outermost error message.
const MESSAGE_LABEL: &str = "Exceptionmessage: ";
/// Labels in front of the first and second cause.
const CAUSE_LABELS: [&str; 2] = ["Inner Exception 1: ", "Inner Exception 2: "];

/// Line terminator used between report lines.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n`, matching the historical report format.
    #[default]
    CrLf,
    /// `\n`.
    Lf,
}

impl LineEnding {
    /// The terminator as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// The phase a failure happened in, used to head a report.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Turning the text into a parsed expression.
    Parse,
    /// Calculating the parsed expression.
    Calculate,
}

impl Stage {
    /// Headline shown above the report of a failure in this stage.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Parse => "error while parsing the expression",
            Self::Calculate => "error while calculating",
        }
    }
}

/// Renders an error and its causes as a fixed multi-line report.
///
/// The first line holds the error's own message. Each cause found through
/// [`Error::source`] follows on its own line, up to two of them; the scanner
/// never nests errors deeper than that, so further causes are not rendered.
/// Every line, including the last, ends with `ending`.
///
/// # Parameters
/// - `err`: The outermost error.
/// - `ending`: The line terminator.
///
/// # Returns
/// The rendered report.
///
/// # Example
/// ```
/// use comma_calc::{
///     parse,
///     report::{LineEnding, format_with_causes},
/// };
///
/// let err = parse("5,7/").unwrap_err();
/// assert_eq!(format_with_causes(&err, LineEnding::Lf),
///            "Exceptionmessage: right operand is malformed\n\
///             Inner Exception 1: number is missing entirely\n");
/// ```
#[must_use]
pub fn format_with_causes(err: &dyn Error, ending: LineEnding) -> String {
    let eol = ending.as_str();
    let mut report = format!("{MESSAGE_LABEL}{err}{eol}");

    let causes = std::iter::successors(err.source(), |&cause| cause.source());
    for (label, cause) in CAUSE_LABELS.iter().zip(causes) {
        report.push_str(&format!("{label}{cause}{eol}"));
    }

    report
}

/// Renders a failure report headed by the stage it happened in.
///
/// The headline always ends with `\n`, independent of `ending`, as it is
/// shown above the report rather than being part of it.
#[must_use]
pub fn format_failure(stage: Stage, err: &dyn Error, ending: LineEnding) -> String {
    format!("{}\n{}", stage.headline(), format_with_causes(err, ending))
}

/// Formats a result for display.
///
/// Uses Rust's float formatting, which is independent of the user's locale:
/// `.` as the decimal point and no digit grouping. This keeps results from
/// being confused with the `,` separator of the input grammar.
///
/// # Example
/// ```
/// use comma_calc::report::format_number;
///
/// assert_eq!(format_number(-7.5), "-7.5");
/// assert_eq!(format_number(1_000_000.0), "1000000");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}
