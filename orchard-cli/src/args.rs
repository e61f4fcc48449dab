//! Picker descriptions given on the command line.

use anyhow::Context;
use orchard_domain::Picker;
use orchard_types::Fruit;

/// A picker written as `NAME=FRUIT,FRUIT,...`, fruit in `taste/size/quality` form.
///
/// The name may be empty (`=sweet/large/healthy`) and the fruit list may be omitted (`Chuck`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSpec {
    pub name: String,
    pub fruits: Vec<Fruit>,
}

impl PickerSpec {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let (name, list) = raw.split_once('=').unwrap_or((raw, ""));
        let name = name.trim();
        let fruits = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<Fruit>()
                    .with_context(|| format!("picker '{}'", name))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            name: name.to_string(),
            fruits,
        })
    }

    /// Fills a fresh picker, one fruit at a time, in the given order.
    pub fn build(&self) -> Picker {
        let mut picker = Picker::new(self.name.as_str());
        for fruit in &self.fruits {
            picker.add_fruit(*fruit);
        }
        picker
    }
}
