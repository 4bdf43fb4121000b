/// Synopsis line marker: `= A short summary`.
pub struct SynopsisMarker;

impl SynopsisMarker {
    pub const PREFIX: char = '=';

    /// The synopsis text with leading whitespace removed, if `line` is a
    /// synopsis line.
    pub fn text(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim_start)
    }
}
