use std::io::{BufRead, Write};
use std::path::PathBuf;

use bindec_core::error::{BindecError, Result};
use bindec_core::{DecodeOptions, Format, collect_inputs, export, export_many, inspect};

use crate::presentation::cli::LayoutArgs;

const PROMPT: &str = "Enter the path to the binary file: ";

fn options_from_args(
    layout: LayoutArgs,
    out: Option<PathBuf>,
    expose_marker: bool,
) -> DecodeOptions {
    DecodeOptions {
        header_size: layout.header_size,
        footer_size: layout.footer_size,
        expose_marker,
        out,
    }
}

/// Ask for one input path on `w`, read the answer from `r`.
pub fn prompt_path<R: BufRead, W: Write>(mut r: R, mut w: W) -> Result<PathBuf> {
    w.write_all(PROMPT.as_bytes())?;
    w.flush()?;
    let mut line = String::new();
    r.read_line(&mut line)?;
    let path = line.trim_end_matches(['\r', '\n']);
    if path.is_empty() {
        return Err(BindecError::Format("no input path given".into()));
    }
    Ok(PathBuf::from(path))
}

pub fn handle_export(
    format: Format,
    inputs: Vec<PathBuf>,
    layout: LayoutArgs,
    out: Option<PathBuf>,
    expose_marker: bool,
) -> Result<()> {
    let inputs = if inputs.is_empty() {
        vec![prompt_path(std::io::stdin().lock(), std::io::stdout())?]
    } else {
        inputs
    };
    let files = collect_inputs(&inputs)?;
    if files.is_empty() {
        return Err(BindecError::Format("no input files found".into()));
    }
    if out.is_some() && files.len() != 1 {
        return Err(BindecError::Format(format!(
            "--out needs exactly one input file, got {}",
            files.len()
        )));
    }
    let opts = options_from_args(layout, out, expose_marker);

    if let [single] = files.as_slice() {
        let report = export(single, format, &opts)?;
        eprintln!(
            "{}: {} rows -> {}",
            format,
            report.rows,
            report.output.display()
        );
        return Ok(());
    }

    let mut failed = 0usize;
    for (path, res) in files.iter().zip(export_many(&files, format, &opts)) {
        match res {
            Ok(report) => eprintln!(
                "{}: {} rows -> {}",
                format,
                report.rows,
                report.output.display()
            ),
            Err(e) => {
                failed += 1;
                tracing::error!(input = %path.display(), error = %e, "export failed");
            }
        }
    }
    if failed > 0 {
        return Err(BindecError::Format(format!(
            "{failed} of {} files failed",
            files.len()
        )));
    }
    Ok(())
}

pub fn handle_inspect(
    format: Format,
    input: PathBuf,
    layout: LayoutArgs,
    json: bool,
) -> Result<()> {
    let opts = options_from_args(layout, None, false);
    let file_layout = format.layout(&opts)?;
    let body = inspect(&input, format, &opts)?;
    if json {
        let doc = serde_json::json!({
            "format": format,
            "layout": file_layout,
            "body": body,
        });
        let text = serde_json::to_string_pretty(&doc)
            .map_err(|e| BindecError::Format(format!("json encode: {e}")))?;
        println!("{text}");
    } else {
        println!(
            "format={} file_size={} header={} footer={} record_size={} body={} records={} dropped={}",
            format,
            body.file_size,
            file_layout.header_size,
            file_layout.footer_size,
            file_layout.record_size,
            body.len,
            body.records,
            body.remainder
        );
    }
    Ok(())
}
