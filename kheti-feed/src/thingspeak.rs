//! Decodificação do feed ThingSpeak (`channels/<id>/feeds.json`)
//!
//! Os campos `field1..field8` chegam como strings, números ou `null`. Cada
//! campo mapeado é convertido para `f64` no estilo "coerce": qualquer valor
//! que não seja um número finito vira leitura ausente.

use std::collections::BTreeMap;

use kheti_core::{describe, DescriptiveStats, SensorKind, SensorSnapshot};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FeedResult;

/// Metadados do canal (subconjunto)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_entry_id: Option<u64>,
}

/// Registro cru, antes do mapeamento de campos
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeed {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub entry_id: Option<u64>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

/// Corpo de resposta de `feeds.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelResponse {
    #[serde(default)]
    pub channel: Option<ChannelInfo>,
    #[serde(default)]
    pub feeds: Option<Vec<RawFeed>>,
}

/// Associação campo ThingSpeak → sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    entries: Vec<(String, SensorKind)>,
}

impl FieldMapping {
    /// Mapeamento vazio
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Associa `field` ao sensor, substituindo associação anterior do mesmo sensor
    pub fn with(mut self, field: impl Into<String>, kind: SensorKind) -> Self {
        self.entries.retain(|(_, k)| *k != kind);
        self.entries.push((field.into(), kind));
        self
    }

    pub fn field_for(&self, kind: SensorKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, k)| *k == kind)
            .map(|(field, _)| field.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SensorKind)> {
        self.entries.iter().map(|(field, kind)| (field.as_str(), *kind))
    }
}

impl Default for FieldMapping {
    /// field1 Temperature, field2 Humidity, field3 Soil_Moisture, field4 pH
    fn default() -> Self {
        Self::new()
            .with("field1", SensorKind::Temperature)
            .with("field2", SensorKind::Humidity)
            .with("field3", SensorKind::SoilMoisture)
            .with("field4", SensorKind::Ph)
    }
}

/// Converte um valor JSON em número finito, ou ausente
pub fn coerce_numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Um registro do canal com leituras já tipadas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Carimbo de tempo como enviado pelo ThingSpeak (ISO 8601)
    pub created_at: String,
    pub entry_id: Option<u64>,
    pub readings: SensorSnapshot,
}

impl Feed {
    fn from_raw(raw: RawFeed, mapping: &FieldMapping) -> Self {
        let mut readings = SensorSnapshot::default();
        for (field, kind) in mapping.iter() {
            readings.set(kind, raw.fields.get(field).and_then(coerce_numeric));
        }
        Self {
            created_at: raw.created_at,
            entry_id: raw.entry_id,
            readings,
        }
    }
}

/// Ponto de uma série temporal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub created_at: String,
    pub value: f64,
}

/// Tabela de leituras do canal, do registro mais antigo ao mais recente
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmData {
    pub channel: Option<ChannelInfo>,
    pub feeds: Vec<Feed>,
}

impl FarmData {
    /// Tabela vazia (estado "sem dados")
    pub fn empty() -> Self {
        Self::default()
    }

    /// Aplica o mapeamento de campos a uma resposta decodificada
    pub fn from_response(response: ChannelResponse, mapping: &FieldMapping) -> Self {
        let feeds: Vec<Feed> = response
            .feeds
            .unwrap_or_default()
            .into_iter()
            .map(|raw| Feed::from_raw(raw, mapping))
            .collect();

        if feeds.is_empty() {
            tracing::warn!("No data found in the ThingSpeak channel");
        } else {
            tracing::debug!(feeds = feeds.len(), "decoded ThingSpeak channel");
        }

        Self {
            channel: response.channel,
            feeds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    /// Valor mais recente não ausente de um sensor
    pub fn latest(&self, kind: SensorKind) -> Option<f64> {
        self.feeds.iter().rev().find_map(|feed| feed.readings.get(kind))
    }

    /// Snapshot com o valor mais recente de cada sensor
    pub fn latest_snapshot(&self) -> SensorSnapshot {
        let mut snapshot = SensorSnapshot::default();
        for kind in SensorKind::ALL {
            snapshot.set(kind, self.latest(kind));
        }
        snapshot
    }

    /// Série temporal de um sensor, sem os registros ausentes
    pub fn series(&self, kind: SensorKind) -> Vec<SeriesPoint> {
        self.feeds
            .iter()
            .filter_map(|feed| {
                feed.readings.get(kind).map(|value| SeriesPoint {
                    created_at: feed.created_at.clone(),
                    value,
                })
            })
            .collect()
    }

    /// Sensores com pelo menos uma leitura
    pub fn available_sensors(&self) -> Vec<SensorKind> {
        SensorKind::ALL
            .into_iter()
            .filter(|&kind| self.feeds.iter().any(|feed| feed.readings.get(kind).is_some()))
            .collect()
    }

    pub fn stats(&self, kind: SensorKind) -> Option<DescriptiveStats> {
        let values: Vec<f64> = self.series(kind).into_iter().map(|p| p.value).collect();
        describe(&values)
    }
}

/// Decodifica o corpo de `feeds.json`
pub fn parse_channel(json: &str, mapping: &FieldMapping) -> FeedResult<FarmData> {
    let response: ChannelResponse = serde_json::from_str(json)?;
    Ok(FarmData::from_response(response, mapping))
}
