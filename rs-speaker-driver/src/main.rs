use clap::Parser;
use log::info;

use rs_speaker_core::io::{get_filename, read_file};
use rs_speaker_core::{identify_speaker, Backend};

/// Decides which of two speakers more likely uttered a third text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Reference text of speaker A
	filename_a: String,

	/// Reference text of speaker B
	filename_b: String,

	/// Unidentified text
	filename_c: String,

	/// Order of the Markov models
	k: usize,

	/// Storage backend: 'hashtable' or 'dict'
	backend: Backend,

	/// Print the report as JSON
	#[arg(long)]
	json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let speech_a = read_file(&args.filename_a)?;
	let speech_b = read_file(&args.filename_b)?;
	let speech_c = read_file(&args.filename_c)?;
	info!(
		"speaker A = {}, speaker B = {}, unidentified = {}",
		get_filename(&args.filename_a)?,
		get_filename(&args.filename_b)?,
		get_filename(&args.filename_c)?
	);

	let report = identify_speaker(&speech_a, &speech_b, &speech_c, args.k, args.backend)?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("Speaker A: {}", report.speaker_a);
	println!("Speaker B: {}\n", report.speaker_b);
	println!("Conclusion: Speaker {} is most likely", report.conclusion);

	Ok(())
}
