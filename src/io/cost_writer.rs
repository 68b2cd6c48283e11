use std::io::Write;

use crate::cost::Cost;

/// Emits one cost per line, in the order the cases were read
pub struct CostWriter<W: Write> {
    writer: W,
    lines_written: u64,
}

impl<W: Write> CostWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    pub fn write_cost(&mut self, cost: Cost) -> Result<(), std::io::Error> {
        writeln!(self.writer, "{cost}")?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn flush(&mut self) -> Result<(), std::io::Error> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use regex::Regex;

    #[test]
    fn one_line_per_cost() {
        let mut writer = CostWriter::new(Vec::new());
        for cost in [6, 11, 15, 0] {
            writer.write_cost(cost).unwrap();
        }
        assert_eq!(writer.lines_written(), 4);

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "6\n11\n15\n0\n");
        assert!(Regex::new(r"^(\d+\n)+$").unwrap().is_match(&output));
    }
}
