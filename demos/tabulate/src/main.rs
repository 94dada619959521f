//! Truth-table driver.
//!
//! Parses a sentence, prints the canonical rendering and the aligned
//! truth table, and classifies it. `--dot` additionally prints the
//! Graphviz rendering of the parse tree.
//!
//! Run with:
//! ```bash
//! cargo run -- '¬(p⊃q)'
//! cargo run -- --dot 'p∨¬p'
//! ```

use clap::Parser;
use log::info;

use wff_rs::table::TruthTable;
use wff_rs::wff::Wff;

#[derive(Parser, Debug)]
#[command(about = "Parse a propositional sentence and print its truth table")]
struct Args {
    /// The sentence to analyse, e.g. '¬(p⊃q)'.
    formula: String,

    /// Also print the parse tree in DOT (Graphviz) format.
    #[arg(long)]
    dot: bool,

    /// Refuse to tabulate above this many distinct atomics.
    #[arg(long, default_value_t = 20)]
    max_atomics: usize,

    /// Log level for the library internals.
    #[arg(long, default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut f = Wff::new(&args.formula)?;
    if f.is_empty() {
        println!("empty formula: nothing to tabulate");
        return Ok(());
    }
    println!("{}", f);

    let atomics = f.find_atomics().len();
    if atomics > args.max_atomics {
        return Err(color_eyre::eyre::eyre!(
            "{} distinct atomics would need {} rows; raise --max-atomics to force it",
            atomics,
            f.row_count(),
        ));
    }
    info!("tabulating over {} atomics", atomics);

    let table = f.make_table();
    print_table(&table);
    println!(
        "classification: {} ({} of {} rows satisfy)",
        table.classification(),
        table.models(),
        table.rows().len(),
    );

    if args.dot {
        println!();
        print!("{}", f.to_dot()?);
    }

    Ok(())
}

/// Column-aligned rendering: sorted atomics on the left, the formula's
/// glyphs on the right, each value digit directly under its glyph, and
/// the main column marked with `*` underneath.
fn print_table(table: &TruthTable) {
    let digit = |value: bool| if value { '1' } else { '0' };

    // A token is a run of '(' + one glyph + a run of ')'. The offsets say
    // how far into the token the glyph sits.
    let offsets: Vec<(usize, usize)> = table
        .tokens()
        .iter()
        .map(|token| {
            let leading = token.chars().take_while(|&c| c == '(').count();
            let trailing = token.chars().rev().take_while(|&c| c == ')').count();
            (leading, trailing)
        })
        .collect();

    let mut header = String::new();
    for &atomic in table.atomics() {
        header.push(atomic);
        header.push(' ');
    }
    header.push_str("| ");
    header.push_str(&table.tokens().concat());
    println!("{}", header);

    let k = table.atomics().len();
    for row in table.rows() {
        let mut line = String::new();
        for &value in &row[..k] {
            line.push(digit(value));
            line.push(' ');
        }
        line.push_str("| ");
        for (&(leading, trailing), &value) in offsets.iter().zip(&row[k..]) {
            for _ in 0..leading {
                line.push(' ');
            }
            line.push(digit(value));
            for _ in 0..trailing {
                line.push(' ');
            }
        }
        println!("{}", line);
    }

    let mut marker = String::new();
    marker.push_str(&" ".repeat(2 * k));
    marker.push_str("| ");
    for (j, &(leading, trailing)) in offsets.iter().enumerate() {
        for _ in 0..leading {
            marker.push(' ');
        }
        marker.push(if j == table.main_index() { '*' } else { ' ' });
        for _ in 0..trailing {
            marker.push(' ');
        }
    }
    println!("{}", marker.trim_end());
}
