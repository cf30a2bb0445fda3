//! Format directives: verb, flags, width and precision.

use core::fmt::{self, Display};
use core::str::FromStr;

/// Where padding goes when the rendered text is narrower than the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Pad on the left. The default, as for fixed-width string verbs.
    #[default]
    Right,
    /// Pad on the right (`-` flag, or `{:<N}`).
    Left,
    /// Split the padding, extra column on the right (`{:^N}`).
    Center,
}

/// One format directive applied to an error.
///
/// Built from a [`core::fmt::Formatter`] by the `Display`/`Debug` impls, or
/// parsed from printf-style text such as `"%+20s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// `s` and `v` render the body, `q` quotes it. Anything else is rejected
    /// in the output.
    pub verb: char,
    /// Forces the full trace.
    pub plus: bool,
    /// Forces the brief chain. Loses to `plus` when both are set.
    pub hash: bool,
    /// Side the padding goes on.
    pub align: Align,
    /// Padding character, a space unless set.
    pub fill: char,
    /// Minimum width in characters.
    pub width: Option<usize>,
    /// Accepted and ignored: truncating a trace would silently cut off its causes.
    pub precision: Option<usize>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::new('v')
    }
}

impl FormatSpec {
    /// Directive with the given verb and no flags.
    #[inline]
    pub const fn new(verb: char) -> Self {
        Self { verb, plus: false, hash: false, align: Align::Right, fill: ' ', width: None, precision: None }
    }

    /// Sets the `+` flag.
    #[inline]
    pub fn plus(mut self) -> Self {
        self.plus = true;
        self
    }

    /// Sets the `#` flag.
    #[inline]
    pub fn hash(mut self) -> Self {
        self.hash = true;
        self
    }

    /// Sets the minimum width.
    #[inline]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the precision, which rendering ignores.
    #[inline]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the alignment.
    #[inline]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Reads flags, width and alignment off a formatter.
    ///
    /// `{:+}` maps to `plus`, `{:#}` to `hash`, `{:<N}` and `{:-N}` to left
    /// alignment. Width without an explicit alignment right-justifies, and
    /// `{:0N}` pads it with zeros like the `0` flag of [`parse`](Self::parse).
    pub fn from_formatter(f: &fmt::Formatter<'_>, verb: char) -> Self {
        let (align, fill) = match f.align() {
            Some(fmt::Alignment::Left) => (Align::Left, f.fill()),
            Some(fmt::Alignment::Center) => (Align::Center, f.fill()),
            Some(fmt::Alignment::Right) => (Align::Right, f.fill()),
            None if f.sign_minus() => (Align::Left, f.fill()),
            None if f.sign_aware_zero_pad() => (Align::Right, '0'),
            None => (Align::Right, f.fill()),
        };
        Self {
            verb,
            plus: f.sign_plus(),
            hash: f.alternate(),
            align,
            fill,
            width: f.width(),
            precision: f.precision(),
        }
    }

    /// Parses a printf-style directive: `%`, flags from `+#- 0`, optional
    /// width, optional `.precision`, then a single verb character.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::types::render::{Align, FormatSpec};
    ///
    /// let spec = FormatSpec::parse("%-20s").unwrap();
    /// assert_eq!(spec.verb, 's');
    /// assert_eq!(spec.width, Some(20));
    /// assert_eq!(spec.align, Align::Left);
    /// ```
    pub fn parse(input: &str) -> Result<Self, SpecParseError> {
        let rest = input.strip_prefix('%').ok_or(SpecParseError::MissingPercent)?;
        let mut spec = Self::new('v');
        let mut chars = rest.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                '+' => spec.plus = true,
                '#' => spec.hash = true,
                '-' => spec.align = Align::Left,
                '0' => spec.fill = '0',
                ' ' => {},
                _ => break,
            }
            chars.next();
        }

        spec.width = take_number(&mut chars)?;
        if chars.next_if_eq(&'.').is_some() {
            spec.precision = Some(take_number(&mut chars)?.unwrap_or(0));
        }

        spec.verb = chars.next().ok_or(SpecParseError::MissingVerb)?;
        if chars.next().is_some() {
            return Err(SpecParseError::TrailingInput);
        }
        // A `-` flag disables zero padding, as in printf.
        if spec.align == Align::Left {
            spec.fill = ' ';
        }
        Ok(spec)
    }
}

fn take_number(
    chars: &mut core::iter::Peekable<core::str::Chars<'_>>,
) -> Result<Option<usize>, SpecParseError> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let current = value.unwrap_or(0);
        value = Some(
            current
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit as usize))
                .ok_or(SpecParseError::NumberTooLarge)?,
        );
    }
    Ok(value)
}

impl FromStr for FormatSpec {
    type Err = SpecParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reason a printf-style directive could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecParseError {
    /// The input does not start with `%`.
    MissingPercent,
    /// The input ends before a verb character.
    MissingVerb,
    /// Characters follow the verb.
    TrailingInput,
    /// Width or precision overflows `usize`.
    NumberTooLarge,
}

impl Display for SpecParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPercent => f.write_str("format directive must start with '%'"),
            Self::MissingVerb => f.write_str("format directive has no verb"),
            Self::TrailingInput => f.write_str("unexpected characters after the verb"),
            Self::NumberTooLarge => f.write_str("width or precision does not fit in usize"),
        }
    }
}

impl core::error::Error for SpecParseError {}
