// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
};

use crate::{
    config::{
        consts::DEFAULT_PARENT_CODE,
        options::{ExportFormat, ExportOptions, ImageOptions, OutputEncoding, VariantOptions},
    },
    data::DataSet,
    file,
    progress::Progress,
    scrape,
    variants::{self, ColumnRoles, Role},
};

pub enum Parsed<T> {
    Run(T),
    Help,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantArgs {
    pub input: PathBuf,
    pub variants: VariantOptions,
    pub export: ExportOptions,
    /// Never prompt; take defaults.
    pub assume_yes: bool,
}

/* ---------------- Argument parsing ---------------- */

pub fn parse_variant_args<I>(args: I) -> Result<Parsed<VariantArgs>, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = VariantArgs::default();
    let mut input: Option<PathBuf> = None;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => input = Some(PathBuf::from(args.next().ok_or("Missing input path")?)),
            "-o" | "--out" => out.export.out_path = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--param" => out.variants.param = Some(args.next().ok_or("Missing value for --param")?),
            "--product-code" => out.variants.parent_code = Some(args.next().ok_or("Missing value for --product-code")?),
            "--title" => out.variants.title = Some(args.next().ok_or("Missing value for --title")?),
            "--language" => out.variants.language = Some(args.next().ok_or("Missing value for --language")?),
            "--template-index" => {
                let v = args.next().ok_or("Missing value for --template-index")?;
                out.variants.template_index = v
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid template index: {}", v))?; }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                out.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?; }
            "--out-encoding" => {
                let v = args.next().ok_or("Missing value for --out-encoding")?;
                out.export.encoding = OutputEncoding::parse(&v); }
            "--excel-bom" => out.export.encoding = OutputEncoding::Utf8Bom,
            "-y" | "--yes" => out.assume_yes = true,
            "-h" | "--help" => return Ok(Parsed::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    out.input = input.ok_or("Missing input file (-i INPUT)")?;
    Ok(Parsed::Run(out))
}

pub fn parse_image_args<I>(args: I) -> Result<Parsed<ImageOptions>, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = ImageOptions::default();
    let mut url: Option<String> = None;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-f" | "--filter" => opts.filter = Some(args.next().ok_or("Missing value for --filter")?),
            "-o" | "--out" => opts.out_dir = Some(PathBuf::from(args.next().ok_or("Missing output directory")?)),
            "-V" | "--all-variants" => opts.all_variants = true,
            "--secure-first" => opts.try_secure_first = true,
            "-h" | "--help" => return Ok(Parsed::Help),
            s if s.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ if url.is_none() => url = Some(s!(a.trim())),
            _ => return Err(format!("Unexpected argument: {}", a).into()),
        }
    }

    opts.url = url.ok_or("Missing product or image URL")?;
    Ok(Parsed::Run(opts))
}

/* ---------------- Prompts ---------------- */

/// One question with a default; blank answer → default.
pub trait Ask {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String>;
}

pub struct StdinPrompt;

impl Ask for StdinPrompt {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        print!("{} [{}]: ", question, default);
        io::stdout().flush()?;
        let mut line = s!();
        io::stdin().lock().read_line(&mut line)?;
        let answer = line.trim();
        Ok(if answer.is_empty() { s!(default) } else { s!(answer) })
    }
}

/// Fill in what the command line left open, asking when `ask` is available.
///
/// - parameter: a single PARAMETER column is taken as is; with several, a numbered
///   pick (invalid → first), or none when not asking.
/// - parent code: only when the template row has no code (default `NEWCODE`).
/// - title: offered with the template title as default.
pub fn complete_options(
    ds: &DataSet,
    opts: &mut VariantOptions,
    mut ask: Option<&mut dyn Ask>,
    out: &mut dyn Write,
) -> io::Result<()> {
    // out-of-range template: leave it to the builder to report
    let Some(template) = ds.rows.get(opts.template_index) else { return Ok(()) };
    let roles = ColumnRoles::resolve(&ds.headers);

    if opts.param.is_none() {
        match roles.params.as_slice() {
            [] => {}
            [only] => {
                writeln!(out, "Using parameter column: {}", ds.headers[*only])?;
                opts.param = Some(ds.headers[*only].clone());
            }
            many => {
                if let Some(a) = ask.as_deref_mut() {
                    writeln!(out, "Parameter columns:")?;
                    for (i, &ix) in many.iter().enumerate() {
                        writeln!(out, "  {}. {}", i + 1, ds.headers[ix])?;
                    }
                    let pick = a.ask("Distinguishing parameter", "1")?;
                    let n = pick
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .filter(|n| (1..=many.len()).contains(n))
                        .unwrap_or(1);
                    opts.param = Some(ds.headers[many[n - 1]].clone());
                }
            }
        }
    }

    if variants::needs_parent_code(ds, opts) {
        let code = match ask.as_deref_mut() {
            Some(a) => a.ask("Parent product code", DEFAULT_PARENT_CODE)?,
            None => s!(DEFAULT_PARENT_CODE),
        };
        opts.parent_code = Some(code);
    }

    if VariantOptions::text(&opts.title).is_none() {
        if let (Some(a), Some(ix)) = (ask.as_deref_mut(), roles.get(Role::Title)) {
            let title = a.ask("MAIN title", &template[ix])?;
            if title != template[ix] {
                opts.title = Some(title);
            }
        }
    }

    Ok(())
}

/* ---------------- Runners ---------------- */

pub fn run_variants() -> Result<(), Box<dyn Error>> {
    let mut args = match parse_variant_args(env::args().skip(1))? {
        Parsed::Run(a) => a,
        Parsed::Help => {
            print!("{}", include_str!("cli_help.txt"));
            return Ok(());
        }
    };

    let (ds, src) = file::read_table(&args.input)?;
    println!("Loaded {} rows from {} ({})", ds.row_count(), args.input.display(), src.describe());

    let interactive = !args.assume_yes && io::stdin().is_terminal();
    let mut prompt = StdinPrompt;
    let ask: Option<&mut dyn Ask> = if interactive { Some(&mut prompt) } else { None };
    complete_options(&ds, &mut args.variants, ask, &mut io::stdout())?;

    let build = variants::build_variants(&ds, &args.variants)?;
    for n in &build.notices {
        println!("Note: {}", n);
    }

    let sep = args.export.format.delim(src.delimiter);
    let out = args.export.out_path_for(&args.input, src.is_spreadsheet());
    let written = file::write_table(&build.dataset, &out, sep, &args.export.encoding)?;

    println!(
        "Wrote {} rows (MAIN + {} variants, parent {}) to {}",
        build.dataset.row_count(),
        build.variant_rows().len(),
        build.parent_code,
        written.display()
    );
    Ok(())
}

/// Prints progress lines to the terminal.
#[derive(Default)]
pub struct CliProgress {
    done: usize,
    failed: usize,
}

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        println!("  saved {}", label);
    }
    fn item_failed(&mut self, label: &str, err: &str) {
        self.failed += 1;
        eprintln!("  failed {}: {}", label, err);
    }
    fn finish(&mut self) {
        println!("Done: {} saved, {} failed", self.done, self.failed);
    }
}

pub fn run_images() -> Result<(), Box<dyn Error>> {
    let opts = match parse_image_args(env::args().skip(1))? {
        Parsed::Run(o) => o,
        Parsed::Help => {
            print!("{}", include_str!("images_help.txt"));
            return Ok(());
        }
    };

    let mut progress = CliProgress::default();
    let summary = scrape::download_images(&opts, Some(&mut progress))?;
    println!("Images in {}", summary.out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    struct Scripted(VecDeque<&'static str>);

    impl Ask for Scripted {
        fn ask(&mut self, _q: &str, default: &str) -> io::Result<String> {
            Ok(match self.0.pop_front() {
                Some("") | None => s!(default),
                Some(a) => s!(a),
            })
        }
    }

    fn sample(params: &[&str], code: &str) -> DataSet {
        let mut headers = row!["[PRODUCT_CODE]", "[TITLE]"];
        headers.extend(params.iter().map(|p| s!(*p)));
        let mut r = row![code, "Jacket"];
        r.extend(params.iter().map(|_| s!("x")));
        DataSet::new(headers, vec![r])
    }

    #[test]
    fn variant_args_full() {
        let Parsed::Run(a) = parse_variant_args(args(&[
            "-i", "in.csv", "-o", "out.csv", "--param", "Veľkosť", "--product-code", "P1",
            "--title", "T", "--template-index", "2", "--language", "sk",
            "--format", "tsv", "--out-encoding", "cp1250", "-y",
        ])).unwrap() else { panic!("expected run") };

        assert_eq!(a.input, PathBuf::from("in.csv"));
        assert_eq!(a.export.out_path, Some(PathBuf::from("out.csv")));
        assert_eq!(a.variants.param.as_deref(), Some("Veľkosť"));
        assert_eq!(a.variants.parent_code.as_deref(), Some("P1"));
        assert_eq!(a.variants.template_index, 2);
        assert_eq!(a.variants.language.as_deref(), Some("sk"));
        assert_eq!(a.export.format, ExportFormat::Tsv);
        assert_eq!(a.export.encoding, OutputEncoding::Label(s!("cp1250")));
        assert!(a.assume_yes);
    }

    #[test]
    fn variant_args_errors() {
        assert!(parse_variant_args(args(&[])).is_err());
        assert!(parse_variant_args(args(&["-i"])).is_err());
        assert!(parse_variant_args(args(&["-i", "a.csv", "--template-index", "x"])).is_err());
        assert!(parse_variant_args(args(&["-i", "a.csv", "--format", "xml"])).is_err());
        assert!(parse_variant_args(args(&["-i", "a.csv", "--bogus"])).is_err());
        assert!(matches!(parse_variant_args(args(&["--help"])).unwrap(), Parsed::Help));
    }

    #[test]
    fn excel_bom_flag() {
        let Parsed::Run(a) = parse_variant_args(args(&["-i", "a.csv", "--excel-bom"])).unwrap()
            else { panic!("expected run") };
        assert_eq!(a.export.encoding, OutputEncoding::Utf8Bom);
    }

    #[test]
    fn image_args() {
        let Parsed::Run(o) = parse_image_args(args(&[
            "https://northfinder.com/p.html", "-f", "phil", "-o", "pics", "-V", "--secure-first",
        ])).unwrap() else { panic!("expected run") };
        assert_eq!(o.url, "https://northfinder.com/p.html");
        assert_eq!(o.filter.as_deref(), Some("phil"));
        assert_eq!(o.out_dir, Some(PathBuf::from("pics")));
        assert!(o.all_variants && o.try_secure_first);

        assert!(parse_image_args(args(&[])).is_err());
        assert!(parse_image_args(args(&["a", "b"])).is_err());
        assert!(parse_image_args(args(&["a", "--nope"])).is_err());
    }

    #[test]
    fn single_param_column_is_announced() {
        let ds = sample(&["[PARAMETER „Veľkosť“]"], "A1");
        let mut opts = VariantOptions::default();
        let mut out = Vec::new();
        complete_options(&ds, &mut opts, None, &mut out).unwrap();
        assert_eq!(opts.param.as_deref(), Some("[PARAMETER „Veľkosť“]"));
        assert!(String::from_utf8(out).unwrap().contains("Using parameter column"));
    }

    #[test]
    fn several_params_without_prompt_pick_none() {
        let ds = sample(&["[PARAMETER „A“]", "[PARAMETER „B“]"], "A1");
        let mut opts = VariantOptions::default();
        complete_options(&ds, &mut opts, None, &mut Vec::new()).unwrap();
        assert_eq!(opts.param, None);
        assert_eq!(opts.parent_code, None);
        assert_eq!(opts.title, None);
    }

    #[test]
    fn prompted_pick_code_and_title() {
        let ds = sample(&["[PARAMETER „A“]", "[PARAMETER „B“]"], "");
        let mut opts = VariantOptions::default();
        let mut ask = Scripted(VecDeque::from(["2", "", "Winter jacket"]));
        complete_options(&ds, &mut opts, Some(&mut ask), &mut Vec::new()).unwrap();
        assert_eq!(opts.param.as_deref(), Some("[PARAMETER „B“]"));
        assert_eq!(opts.parent_code.as_deref(), Some(DEFAULT_PARENT_CODE));
        assert_eq!(opts.title.as_deref(), Some("Winter jacket"));
    }

    #[test]
    fn invalid_pick_falls_back_to_first_and_blank_title_keeps_template() {
        let ds = sample(&["[PARAMETER „A“]", "[PARAMETER „B“]"], "A1");
        let mut opts = VariantOptions::default();
        let mut ask = Scripted(VecDeque::from(["9", ""]));
        complete_options(&ds, &mut opts, Some(&mut ask), &mut Vec::new()).unwrap();
        assert_eq!(opts.param.as_deref(), Some("[PARAMETER „A“]"));
        assert_eq!(opts.parent_code, None);
        assert_eq!(opts.title, None);
    }

    #[test]
    fn non_interactive_empty_code_gets_default() {
        let ds = sample(&[], "  ");
        let mut opts = VariantOptions::default();
        complete_options(&ds, &mut opts, None, &mut Vec::new()).unwrap();
        assert_eq!(opts.parent_code.as_deref(), Some(DEFAULT_PARENT_CODE));
    }
}
