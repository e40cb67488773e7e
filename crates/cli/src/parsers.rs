use job_insights_shared_kernel::PresentationError;

/// Wrapper type to parse a single-byte CSV delimiter (e.g. `,`, `;`, `tab`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterArg(pub u8);

impl Default for DelimiterArg {
    fn default() -> Self {
        Self(b',')
    }
}

impl std::str::FromStr for DelimiterArg {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| PresentationError::InvalidValue {
            flag: "--delimiter".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };
        match s {
            "tab" | "\\t" => Ok(Self(b'\t')),
            _ => match s.as_bytes() {
                [b'"' | b'\n' | b'\r'] => Err(invalid("quote and newline characters cannot delimit fields")),
                [byte] if byte.is_ascii() => Ok(Self(*byte)),
                _ => Err(invalid("expected a single ASCII character or `tab`")),
            },
        }
    }
}
