//! GraphML exporter, the lossless graph-exchange view.
//!
//! Retains every node's id/kind/color/path and every edge's
//! source/target/relation. Node ids in the document are the actual graph
//! ids (XML-escaped), so the file round-trips without a side table.

use crate::error::Result;
use crate::export::{kind_color, write_err};
use crate::model::CodeGraph;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

/// Write GraphML to `path`.
pub fn write_graphml(path: &Path, graph: &CodeGraph) -> Result<()> {
    let f = File::create(path).map_err(write_err(path))?;
    let mut w = BufWriter::new(f);

    write_document(&mut w, graph).map_err(write_err(path))?;

    info!("graphml: wrote -> {}", path.display());
    Ok(())
}

fn write_document<W: Write>(w: &mut W, graph: &CodeGraph) -> std::io::Result<()> {
    writeln!(w, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        w,
        r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns
     http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#
    )?;

    // Node keys
    writeln!(
        w,
        r#"<key id="d0" for="node" attr.name="type" attr.type="string"/>"#
    )?;
    writeln!(
        w,
        r#"<key id="d1" for="node" attr.name="color" attr.type="string"/>"#
    )?;
    writeln!(
        w,
        r#"<key id="d2" for="node" attr.name="path" attr.type="string"/>"#
    )?;
    // Edge key
    writeln!(
        w,
        r#"<key id="e0" for="edge" attr.name="relationship" attr.type="string"/>"#
    )?;

    writeln!(w, r#"<graph edgedefault="directed">"#)?;

    for n in graph.nodes() {
        writeln!(w, r#"<node id="{}">"#, xml_escape(&n.id))?;
        writeln!(w, r#"  <data key="d0">{}</data>"#, n.kind.as_str())?;
        writeln!(w, r#"  <data key="d1">{}</data>"#, kind_color(n.kind))?;
        if let Some(p) = &n.path {
            writeln!(w, r#"  <data key="d2">{}</data>"#, xml_escape(p))?;
        }
        writeln!(w, r#"</node>"#)?;
    }

    for (i, (src, dst, rel)) in graph.edges().enumerate() {
        writeln!(
            w,
            r#"<edge id="e{}" source="{}" target="{}">"#,
            i,
            xml_escape(&src.id),
            xml_escape(&dst.id)
        )?;
        writeln!(w, r#"  <data key="e0">{}</data>"#, rel)?;
        writeln!(w, r#"</edge>"#)?;
    }

    writeln!(w, r#"</graph>"#)?;
    writeln!(w, r#"</graphml>"#)?;
    w.flush()
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
