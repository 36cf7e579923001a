use crate::cli::StripPhasingArgs;
use crate::utils::{open_vcf_reader, OutputFile, Result};
use crate::vcf::strip_phasing_fields;
use rayon::ThreadPoolBuilder;
use std::time;

pub fn strip_phasing(args: StripPhasingArgs) -> Result<()> {
    let start_timer = time::Instant::now();

    let reader = open_vcf_reader(&args.input_path)?;
    let mut writer = OutputFile::create(&args.output_path)?;

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = initialize_thread_pool(args.num_threads)?;

    let stats = strip_phasing_fields(reader, &mut writer, &pool).map_err(|e| e.to_string())?;
    writer.commit()?;

    log::info!(
        "Lines={} data={} modified={} tags removed={}",
        stats.lines,
        stats.data_lines,
        stats.modified_lines,
        stats.tags_removed
    );
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}

fn initialize_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("exacprep-{}", i))
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))
}
