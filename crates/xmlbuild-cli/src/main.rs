use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use xmlbuild::{Document, Element};

#[derive(Debug, Parser)]
#[command(
    name = "xmlbuild",
    version,
    about = "Build and print sample XML/SVG documents"
)]
struct Args {
    /// Which sample document to generate
    #[arg(value_enum, default_value_t = Sample::Sampler)]
    sample: Sample,
    /// Spaces per nesting level; 0 prints a compact single line
    #[arg(short, long, default_value_t = 2)]
    indent: usize,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Enable tracing output
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Sample {
    /// Nested elements, comments and CDATA
    Sampler,
    /// XHTML 1.0 Strict page
    Xhtml,
    /// SVG skeleton with a few shapes
    Svg,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.trace {
        tracing_subscriber::fmt::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .finish()
            .init();
        info!("logger initialized");
    }

    let doc = match args.sample {
        Sample::Sampler => sampler_document(),
        Sample::Xhtml => xhtml_document(),
        Sample::Svg => svg_document(),
    };
    debug!(
        sample = ?args.sample,
        indent = args.indent,
        elements = element_count(&doc.root),
        "document built"
    );

    let mut xml = doc
        .to_xml_indented(args.indent)
        .context("failed to serialize document")?;
    xml.push('\n');

    write_output(&args.output, xml.as_bytes())?;
    Ok(())
}

fn sampler_document() -> Document {
    let mut doc = Document::new("baz");
    doc.root.element("alpha");
    doc.root.with_element("stuff", |stuff| {
        stuff.with_element("y", |y| {
            y.comment("why?");
        });
        stuff.with_element("x", |x| {
            x.element("z");
            x.text("'x&z'");
        });
        stuff.comment("stuff is fun");
        stuff.with_element("block", |block| {
            block.text("blocks are fun too!");
        });
    });
    doc.root.cdata("huh?");
    doc
}

fn xhtml_document() -> Document {
    let mut doc = Document::xhtml_strict();
    doc.root.with_element("head", |head| {
        head.with_element("title", |title| {
            title.text("xmlbuild");
        });
    });
    doc.root.with_element("body", |body| {
        body.with_element("p", |p| {
            p.text("blah blah & yadda yadda");
            p.comment("more praise here");
            p.element("br");
            p.text("that's all!");
        });
    });
    doc
}

fn svg_document() -> Document {
    let mut doc = Document::svg();
    doc.root
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", "120")
        .attr("height", "120");
    doc.root
        .element("rect")
        .attr("x", "10")
        .attr("y", "10")
        .attr("width", "100")
        .attr("height", "100")
        .attr("fill", "none")
        .attr("stroke", "black");
    doc.root
        .element("circle")
        .attr("cx", "60")
        .attr("cy", "60")
        .attr("r", "40");
    let title = doc.root.element("title");
    title.text("xmlbuild sample");
    doc
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}

fn element_count(element: &Element) -> usize {
    1 + element
        .children
        .iter()
        .filter_map(|child| match child {
            xmlbuild::Content::Element(el) => Some(element_count(el)),
            _ => None,
        })
        .sum::<usize>()
}
