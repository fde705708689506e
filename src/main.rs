//! rsiconlink 命令行入口：把文章链接转换为带平台图标的 Markdown 链接

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rsiconlink::{ConfigManager, GlobalConfig, IconLink, IconResolver, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "rsiconlink")]
#[command(version, about = "Resolve article URLs to platform favicon links")]
#[command(long_about = r#"Resolve article URLs to platform favicon links.

EXAMPLES:
    rsiconlink https://mp.weixin.qq.com/s/abc123
    cat urls.txt | rsiconlink --format jsonl --skip-unknown
    rsiconlink --list

OUTPUT FORMATS:
    text  - One link per line, empty line for unknown URLs (default)
    json  - JSON array
    jsonl - JSON lines, one object per line
"#)]
struct Args {
    /// Article URLs; read from stdin (one per line) when omitted
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: String,

    /// Omit URLs that match no known platform
    #[arg(long)]
    skip_unknown: bool,

    /// Print the known platform table and exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let output_format: OutputFormat = args.format.parse()?;
    let config = ConfigManager::custom()
        .output_format(output_format)
        .skip_unknown(args.skip_unknown)
        .verbose(args.verbose)
        .build();

    init_logging(config.verbose);

    let resolver = IconResolver::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        for entry in resolver.platforms() {
            writeln!(out, "{}\t{}\t{}\t{}", entry.code, entry.platform, entry.host, entry.icon_url)
                .context("写入标准输出失败")?;
        }
        return Ok(());
    }

    let urls = if args.urls.is_empty() {
        read_urls(io::stdin().lock()).context("读取标准输入失败")?
    } else {
        args.urls
    };
    debug!("待解析链接数：{}", urls.len());

    let links = resolver.resolve_all(urls.as_slice());
    write_links(&mut out, &links, &config).context("输出结果失败")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// 每行一个链接，忽略空行
fn read_urls<R: BufRead>(reader: R) -> rsiconlink::IconResult<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}

fn write_links<W: Write>(
    out: &mut W,
    links: &[IconLink],
    config: &GlobalConfig,
) -> rsiconlink::IconResult<()> {
    let selected: Vec<&IconLink> = links
        .iter()
        .filter(|link| !config.skip_unknown || link.is_known())
        .collect();

    match config.output_format {
        OutputFormat::Text => {
            for link in selected {
                writeln!(out, "{}", link.html)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &selected)?;
            writeln!(out)?;
        }
        OutputFormat::JsonLines => {
            for link in selected {
                serde_json::to_writer(&mut *out, link)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(urls: &[&str], config: &GlobalConfig) -> String {
        let links = IconResolver::new().resolve_all(urls);
        let mut buf = Vec::new();
        write_links(&mut buf, &links, config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_read_urls_skips_blank_lines() {
        let input = "https://juejin.cn/post/1\n\n  \n  https://example.org  \n";
        let urls = read_urls(input.as_bytes()).unwrap();
        assert_eq!(urls, vec!["https://juejin.cn/post/1", "https://example.org"]);
    }

    #[test]
    fn test_text_output_keeps_unknown_as_empty_line() {
        let output = render(&["https://example.org", "https://juejin.cn/post/1"], &ConfigManager::get_default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with(r#"[<img src="https://juejin.cn/favicon.ico""#));
    }

    #[test]
    fn test_jsonl_output_skip_unknown() {
        let config = ConfigManager::custom()
            .output_format(OutputFormat::JsonLines)
            .skip_unknown(true)
            .build();
        let output = render(&["https://example.org", "https://www.infoq.cn/a"], &config);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        let link: IconLink = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(link.code, 7);
    }

    #[test]
    fn test_json_output_is_array() {
        let config = ConfigManager::custom().output_format(OutputFormat::Json).build();
        let output = render(&["https://blog.csdn.net/a", "nope"], &config);
        let links: Vec<IconLink> = serde_json::from_str(&output).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1], IconLink::unknown());
    }
}
