//! Display functions for command results

use super::formatters::{histogram_bar, word_columns};
use crate::commands::{BenchmarkResult, QueryOutcome};
use colored::Colorize;

const WORDS_PER_LINE: usize = 8;

/// Print the result of a query
pub fn print_query_outcome(outcome: &QueryOutcome) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Query: {}", outcome.query.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if outcome.count == 0 {
        println!("\n{}", "No words match".red().bold());
    } else {
        println!(
            "\n{}",
            format!("Found {} words", outcome.count).green().bold()
        );
        if outcome.words.len() < outcome.count {
            println!("  (showing first {})", outcome.words.len());
        }
    }

    if outcome.words.iter().any(|row| row.score.is_some()) {
        for row in &outcome.words {
            let score = row.score.map_or_else(String::new, |s| s.to_string());
            println!("  {:<7} {}", row.word, score.bright_black());
        }
    } else {
        let texts: Vec<&str> = outcome.words.iter().map(|row| row.word.as_str()).collect();
        for line in word_columns(&texts, WORDS_PER_LINE) {
            println!("  {line}");
        }
    }

    if let Some(histogram) = &outcome.histogram
        && !histogram.is_empty()
    {
        println!("\n📊 {}", "Letter frequencies:".bright_cyan().bold());
        let largest = histogram.first().map_or(0, |entry| entry.count);
        for entry in histogram {
            println!(
                "   {} [{}] {:4}",
                entry.letter.to_char().to_ascii_uppercase(),
                histogram_bar(entry, largest, 30).green(),
                entry.count
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Corpus size:      {}", result.corpus_size);
    println!("   Queries run:      {}", result.total_queries);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Smallest result:  {}",
        format!("{}", result.min_matches).green()
    );
    println!(
        "   Largest result:   {}",
        format!("{}", result.max_matches).yellow()
    );
    println!("   Empty results:    {}", result.empty_results);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.mismatches > 0 {
        println!(
            "\n{}",
            format!("❌ {} results disagreed with a full scan", result.mismatches)
                .red()
                .bold()
        );
    }

    println!("\n📈 {}", "Result sizes:".bright_cyan().bold());
    let largest_bucket = result.size_distribution.keys().copied().max().unwrap_or(0);
    for bucket in 0..=largest_bucket {
        if let Some(&count) = result.size_distribution.get(&bucket) {
            let pct = (count as f64 / result.total_queries as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {:>9}: {bar} {count:4} ({pct:5.1}%)", bucket_label(bucket));
        }
    }
}

fn bucket_label(digits: u32) -> String {
    match digits {
        0 => "0".to_string(),
        1 => "1-9".to_string(),
        d => format!("{}-{}", 10_u64.pow(d - 1), 10_u64.pow(d) - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_labels() {
        assert_eq!(bucket_label(0), "0");
        assert_eq!(bucket_label(1), "1-9");
        assert_eq!(bucket_label(2), "10-99");
        assert_eq!(bucket_label(3), "100-999");
    }
}
