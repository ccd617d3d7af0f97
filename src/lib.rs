use std::{fs::File, io::BufReader, path::Path};

use log::{debug, info};

pub mod atoms;
pub mod config;
pub mod error;
pub mod graph;
pub mod gspan;
pub mod sdf;

use config::Conversion;
use error::{ConvertError, Result};
use gspan::segment;
use sdf::{render, Summary};

/// write `content` to the file `name` in `dir`
pub fn write_output(
    dir: impl AsRef<Path>,
    name: &str,
    content: &str,
) -> Result<()> {
    let path = dir.as_ref().join(name);
    std::fs::write(&path, content).map_err(|e| ConvertError::io(path, e))
}

/// read every graph from `conv.input` and write each one to its own SDF file
/// in `conv.output`, returning the number of files written. stops at the first
/// error, leaving any files already written in place
pub fn convert(conv: &Conversion) -> Result<usize> {
    let input = File::open(&conv.input)
        .map_err(|e| ConvertError::io(&conv.input, e))?;
    std::fs::create_dir_all(&conv.output)
        .map_err(|e| ConvertError::io(&conv.output, e))?;

    info!(
        "converting gSpan graphs in {:?} to SDF files in {:?}",
        conv.input, conv.output
    );
    debug!("shift: {:?}, flush last: {}", conv.shift, conv.flush_last);

    let graphs =
        segment(BufReader::new(input), conv.shift).flush_last(conv.flush_last);
    let mut written = 0;
    for graph in graphs {
        let graph = graph?;
        let (name, content) = render(&graph, written)?;
        write_output(&conv.output, &name, &content)?;
        debug!("wrote {name}, {}", Summary(&graph));
        written += 1;
    }

    info!("done, wrote {written} files");

    Ok(written)
}
