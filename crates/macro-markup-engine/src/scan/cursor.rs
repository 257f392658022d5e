/// A forward-only cursor over the text being scanned.
///
/// Searches operate on the unconsumed remainder and return indices relative
/// to it; the cursor itself only ever moves forward, which makes the
/// termination argument for the scan loop immediate.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Absolute byte position of the cursor in the original input.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Advances by `n` bytes. Callers only pass offsets derived from
    /// searches over `rest()`, so the result stays on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Finds `pat` in the remainder, ignoring ASCII case. Returns the byte
    /// offset relative to the remainder. `pat` must be non-empty ASCII.
    pub fn find_ignore_ascii_case(&self, pat: &[u8]) -> Option<usize> {
        self.rest()
            .as_bytes()
            .windows(pat.len())
            .position(|w| w.eq_ignore_ascii_case(pat))
    }

    /// Finds a single byte in the remainder, relative offset.
    pub fn find_byte(&self, b: u8) -> Option<usize> {
        self.rest().as_bytes().iter().position(|&x| x == b)
    }
}
