use anyhow::{Context, Result, bail};
use blockforge_engine::{
    parse_blocks, parse_page, parse_rich_text, render_blocks, render_page, serialize_rich_text,
};
use std::{env, fs, process};

const USAGE: &str = "Usage: blockforge-cli [--blocks | --rich-text] <file.json>

Renders a CMS content document to HTML on stdout.

  <file.json>              a page document (default mode)
  --blocks <file.json>     a bare block array
  --rich-text <file.json>  a bare rich-text field value";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(html) => println!("{html}"),
        Err(err) => {
            eprintln!("Error: {err:#}");
            eprintln!();
            eprintln!("{USAGE}");
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<String> {
    match args {
        [path] => {
            let page = parse_page(&read(path)?)?;
            Ok(render_page(&page.page_builder).to_html().into_string())
        }
        [mode, path] if mode == "--blocks" => {
            let blocks = parse_blocks(&read(path)?)?;
            Ok(render_blocks(&blocks).to_html().into_string())
        }
        [mode, path] if mode == "--rich-text" => {
            let content = parse_rich_text(&read(path)?)?;
            Ok(serialize_rich_text(Some(&content)).into_string())
        }
        _ => bail!("expected a single input file, optionally preceded by --blocks or --rich-text"),
    }
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}
