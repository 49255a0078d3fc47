pub mod compose;
mod error;
mod fonts;
pub mod model;
pub mod pdf;
pub mod resume;

pub use error::Error;

use std::path::Path;
use std::time::Instant;

/// Composes the résumé and writes the finished PDF to `output`.
pub fn generate_resume(output: &Path) -> Result<(), Error> {
    let t0 = Instant::now();

    let doc = resume::compose();
    let t_compose = t0.elapsed();

    let bytes = pdf::render(&doc);
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: compose={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms ({} pages, {} bytes)",
        t_compose.as_secs_f64() * 1000.0,
        (t_render - t_compose).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        doc.pages.len(),
        bytes.len(),
    );

    Ok(())
}

/// In-memory variant of [`generate_resume`] for callers that handle the
/// bytes themselves.
pub fn resume_pdf_bytes() -> Vec<u8> {
    pdf::render(&resume::compose())
}
