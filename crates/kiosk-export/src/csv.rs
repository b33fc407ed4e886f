use crate::payload::ExportPayload;

pub const CSV_HEADER: [&str; 5] = ["parameter_id", "value", "unit", "status", "source"];

/// One row per reading, RFC 4180 quoting, CRLF line endings.
pub fn to_csv(payload: &ExportPayload) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER);
    for reading in &payload.readings {
        let value = reading.value.map(|v| v.to_string()).unwrap_or_default();
        push_row(
            &mut out,
            [
                reading.parameter_id.as_str(),
                value.as_str(),
                reading.unit.as_str(),
                reading.status.as_str(),
                reading.source.as_str(),
            ],
        );
    }
    out
}

fn push_row<const N: usize>(out: &mut String, fields: [&str; N]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&quote(field));
    }
    out.push_str("\r\n");
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
