//! Camada de apresentação: tabelas no terminal e gráficos de barras PNG
//!
//! A geometria e o diretório de saída são configuração explícita
//! ([`PlotConfig`]), não estado global de runtime.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use plotters::prelude::*;
use qkill_engine::Counts;

use crate::drivers::TruthTableRow;

/// Configuração explícita de plotagem
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Diretório onde os PNGs são salvos
    pub out_dir: PathBuf,
    /// Largura do gráfico em pixels
    pub width: u32,
    /// Altura do gráfico em pixels
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("plots"),
            width: 960,
            height: 480,
        }
    }
}

/// Imprime a tabela clássico vs. quântico com cabeçalho destacado
pub fn print_truth_table(rows: &[TruthTableRow]) {
    let header = format!(
        "{:>8}  {:>5}  {:>10}  {:>17}  {:>14}",
        "Mutation", "Timer", "Geosensing", "Quantum_Prob_Kill", "Classical_Kill"
    );
    println!("{}", header.bold());

    for row in rows {
        let line = format!(
            "{:>8}  {:>5}  {:>10}  {:>17.6}  {:>14}",
            row.mutation, row.timer, row.geosense, row.quantum_prob_kill, row.classical_kill
        );
        if row.classical_kill == 1 {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}

/// Imprime uma amostra dos primeiros resultados e o histograma completo
/// como barras de terminal
pub fn print_counts(counts: &Counts, sample: usize) {
    let preview: Vec<String> = counts
        .iter()
        .take(sample)
        .map(|(bits, count)| format!("('{bits}', {count})"))
        .collect();
    println!("Sample: [{}]", preview.join(", "));

    let max = counts.iter().map(|(_, count)| count).max().unwrap_or(1);
    for (bits, count) in counts.iter() {
        let bar_len = ((count as f64 / max as f64) * 40.0).round() as usize;
        println!(
            "  {}  {:>5}  {}",
            bits.cyan(),
            count,
            "█".repeat(bar_len).blue()
        );
    }
}

/// Renderiza o histograma como gráfico de barras e salva em
/// `<out_dir>/<título sanitizado>.png`. Todos os 2^C buckets são
/// desenhados, ausentes com altura zero
pub fn plot_counts(counts: &Counts, title: &str, config: &PlotConfig) -> Result<()> {
    if counts.is_empty() {
        println!("No data to plot for {title}");
        return Ok(());
    }

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating plot directory {}", config.out_dir.display()))?;
    let path = config
        .out_dir
        .join(format!("{}.png", sanitize_title(title)));

    let bit_width = counts.bit_width();
    let buckets = 1usize << bit_width;
    let max = counts.iter().map(|(_, count)| count).max().unwrap_or(1).max(1);

    let root = BitMapBackend::new(&path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("bar chart '{title}': {e}"))?;

    let width = config.width as i32;
    let height = config.height as i32;
    let margin = 24;
    let base = height - margin;
    let span = width - 2 * margin;
    let slot = span / buckets as i32;
    let gap = (slot / 5).max(1);

    for index in 0..buckets {
        let bits = format!("{:0width$b}", index, width = bit_width);
        let count = counts.get(&bits);
        let bar_height = ((count as f64 / max as f64) * f64::from(base - margin)).round() as i32;

        let x0 = margin + index as i32 * slot + gap / 2;
        let x1 = x0 + slot - gap;
        let y0 = base - bar_height;
        root.draw(&Rectangle::new([(x0, y0), (x1, base)], BLUE.filled()))
            .map_err(|e| anyhow!("bar chart '{title}': {e}"))?;
    }

    root.draw(&PathElement::new(
        vec![(margin, base), (width - margin, base)],
        BLACK.stroke_width(1),
    ))
    .map_err(|e| anyhow!("bar chart '{title}': {e}"))?;

    root.present()
        .map_err(|e| anyhow!("bar chart '{title}': {e}"))?;
    println!("Saved: {}", path.display());
    Ok(())
}

/// Troca espaços por '_' e descarta caracteres fora de [A-Za-z0-9_()-]
fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '(' | ')'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title() {
        assert_eq!(
            sanitize_title("Quantum Superposition (Ideal)"),
            "Quantum_Superposition_(Ideal)"
        );
        assert_eq!(sanitize_title("a/b: c*d"), "ab_cd");
    }

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.out_dir, PathBuf::from("plots"));
        assert!(config.width > 0 && config.height > 0);
    }
}
