//! Estatística descritiva de uma série de leituras

use serde::{Deserialize, Serialize};

/// Resumo de uma série (equivalente a um `describe()` de tabela)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Número de valores finitos
    pub count: usize,
    pub mean: f64,
    /// Desvio padrão amostral (n-1); ausente com menos de 2 valores
    pub std: Option<f64>,
    pub min: f64,
    /// Percentil 25
    pub q25: f64,
    pub median: f64,
    /// Percentil 75
    pub q75: f64,
    pub max: f64,
}

impl DescriptiveStats {
    /// Amplitude (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Quantil com interpolação linear entre vizinhos (posição `q * (n - 1)`)
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    if frac == 0.0 || sorted[lower] == sorted[upper] {
        return sorted[lower];
    }
    sorted[lower] * (1.0 - frac) + sorted[upper] * frac
}

/// Calcula o resumo ignorando valores não finitos.
///
/// Retorna `None` quando não sobra nenhum valor.
pub fn describe(values: &[f64]) -> Option<DescriptiveStats> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();

    // Soma sobre valores normalizados por max |v| para não transbordar
    let scale = sorted[0].abs().max(sorted[count - 1].abs());
    let (mean, std) = if scale == 0.0 {
        (0.0, (count > 1).then_some(0.0))
    } else {
        let unit_mean = sorted.iter().map(|v| v / scale).sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let var = sorted
                .iter()
                .map(|v| (v / scale - unit_mean).powi(2))
                .sum::<f64>()
                / (count - 1) as f64;
            var.sqrt() * scale
        });
        (unit_mean * scale, std)
    };

    Some(DescriptiveStats {
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}
