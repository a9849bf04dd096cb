use std::io::{self, Write};

use serde_json::Value;

use config::ReportFormat;
use sizer::ComponentSizer;

pub fn text_report(sizer: &ComponentSizer) -> String {
    let areas = sizer.areas();
    let mut out = String::new();
    for cell in sizer.grid().cells() {
        out.push_str(&format!("Area of ({}, {}): {}\n", cell.row, cell.col, areas.get(cell)));
    }
    out
}

pub fn json_report(sizer: &ComponentSizer) -> Value {
    json!({
        "dim": sizer.grid().dim(),
        "areas": sizer.areas().gmap,
        "components": sizer.component_sizes(),
    })
}

pub fn write_report<W: Write>(out: &mut W, sizer: &ComponentSizer, format: ReportFormat) -> io::Result<()> {
    match format {
        ReportFormat::Text => out.write_all(text_report(sizer).as_bytes()),
        ReportFormat::Json => writeln!(out, "{}", json_report(sizer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComponentSizer {
        let mut sizer = ComponentSizer::new(vec![vec![1, 0], vec![1, 0]]).unwrap();
        sizer.build();
        sizer
    }

    #[test]
    fn text_lists_cells_row_major() {
        let text = text_report(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "Area of (0, 0): 2",
            "Area of (0, 1): 0",
            "Area of (1, 0): 2",
            "Area of (1, 1): 0",
        ]);
    }

    #[test]
    fn json_carries_matrix_and_components() {
        let v = json_report(&sample());
        assert_eq!(v["dim"], 2);
        assert_eq!(v["areas"], json!([[2, 0], [2, 0]]));
        assert_eq!(v["components"], json!([2]));
    }

    #[test]
    fn writes_json_line() {
        let mut buf: Vec<u8> = Vec::new();
        write_report(&mut buf, &sample(), ReportFormat::Json).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(parsed, json_report(&sample()));
    }
}
