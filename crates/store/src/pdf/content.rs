//! PDF content stream generation
//!
//! A builder for the graphics operators a raster page needs: graphics state
//! save/restore (q/Q), the transformation matrix (cm), and XObject painting
//! (Do).

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    /// Create a new empty content stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content stream data
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Get the length of the content stream
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the content stream is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Save the current graphics state (q)
    pub fn save_state(&mut self) -> &mut Self {
        self.write_line("q");
        self
    }

    /// Restore the graphics state (Q)
    pub fn restore_state(&mut self) -> &mut Self {
        self.write_line("Q");
        self
    }

    /// Concatenate a transformation matrix (cm)
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        let line = format!(
            "{} {} {} {} {} {} cm",
            fmt_num(a),
            fmt_num(b),
            fmt_num(c),
            fmt_num(d),
            fmt_num(e),
            fmt_num(f)
        );
        self.write_line(&line);
        self
    }

    /// Paint a named XObject (Do)
    pub fn draw_xobject(&mut self, name: &str) -> &mut Self {
        self.write_line(&format!("/{name} Do"));
        self
    }

    fn write_line(&mut self, line: &str) {
        self.data.extend_from_slice(line.as_bytes());
        self.data.push(b'\n');
    }
}

/// Format an operand without trailing zeros
fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        let s = format!("{n:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_placement_sequence() {
        let mut content = ContentStream::new();
        content
            .save_state()
            .transform(538.58, 0.0, 0.0, 785.19, 28.35, 28.35)
            .draw_xobject("Im0")
            .restore_state();

        let text = String::from_utf8(content.into_bytes()).unwrap();
        assert_eq!(text, "q\n538.58 0 0 785.19 28.35 28.35 cm\n/Im0 Do\nQ\n");
    }

    #[test]
    fn test_fmt_trims_zeros() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(2.5000), "2.5");
        assert_eq!(fmt_num(0.1234), "0.1234");
    }
}
