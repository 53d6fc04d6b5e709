use serde::{Deserialize, Serialize};

/// The four fire-regime components assessed by the rubric. The set is closed;
/// every scoring stage iterates it exhaustively via [`FireComponent::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FireComponent {
    Size,
    Frequency,
    Severity,
    Area,
}

impl FireComponent {
    pub const ALL: [FireComponent; 4] = [
        FireComponent::Size,
        FireComponent::Frequency,
        FireComponent::Severity,
        FireComponent::Area,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FireComponent::Size => "High Severity Patch Size",
            FireComponent::Frequency => "Fire Frequency",
            FireComponent::Severity => "Soil Burn Severity",
            FireComponent::Area => "Annual Area Burned",
        }
    }
}

/// The five ecosystem components that can respond to a fire-regime change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcosystemComponent {
    Survivorship,
    Recruitment,
    Erosion,
    Composition,
    Structure,
}

impl EcosystemComponent {
    pub const ALL: [EcosystemComponent; 5] = [
        EcosystemComponent::Survivorship,
        EcosystemComponent::Recruitment,
        EcosystemComponent::Erosion,
        EcosystemComponent::Composition,
        EcosystemComponent::Structure,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EcosystemComponent::Survivorship => "Survivorship",
            EcosystemComponent::Recruitment => "Recruitment",
            EcosystemComponent::Erosion => "Erosion & Debris Flows",
            EcosystemComponent::Composition => "Composition",
            EcosystemComponent::Structure => "Structure",
        }
    }
}

/// The three fuel components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelComponent {
    Loading,
    Horizontal,
    Vertical,
}

impl FuelComponent {
    pub const ALL: [FuelComponent; 3] = [
        FuelComponent::Loading,
        FuelComponent::Horizontal,
        FuelComponent::Vertical,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FuelComponent::Loading => "Fuel Loading",
            FuelComponent::Horizontal => "Fuel Horizontal Continuity",
            FuelComponent::Vertical => "Fuel Vertical Arrangement",
        }
    }
}

/// Union of ecosystem and fuel components: one column of the response matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetComponent {
    Ecosystem(EcosystemComponent),
    Fuel(FuelComponent),
}

impl TargetComponent {
    pub const ALL: [TargetComponent; 8] = [
        TargetComponent::Ecosystem(EcosystemComponent::Survivorship),
        TargetComponent::Ecosystem(EcosystemComponent::Recruitment),
        TargetComponent::Ecosystem(EcosystemComponent::Erosion),
        TargetComponent::Ecosystem(EcosystemComponent::Composition),
        TargetComponent::Ecosystem(EcosystemComponent::Structure),
        TargetComponent::Fuel(FuelComponent::Loading),
        TargetComponent::Fuel(FuelComponent::Horizontal),
        TargetComponent::Fuel(FuelComponent::Vertical),
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TargetComponent::Ecosystem(c) => c.display_name(),
            TargetComponent::Fuel(c) => c.display_name(),
        }
    }
}

/// One value per fire-regime component. Replaces the original tool's lookups
/// by constructed string keys with exhaustive structured access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct FireRegime<T> {
    pub size: T,
    pub frequency: T,
    pub severity: T,
    pub area: T,
}

impl<T> FireRegime<T> {
    pub fn get(&self, component: FireComponent) -> &T {
        match component {
            FireComponent::Size => &self.size,
            FireComponent::Frequency => &self.frequency,
            FireComponent::Severity => &self.severity,
            FireComponent::Area => &self.area,
        }
    }

    pub fn get_mut(&mut self, component: FireComponent) -> &mut T {
        match component {
            FireComponent::Size => &mut self.size,
            FireComponent::Frequency => &mut self.frequency,
            FireComponent::Severity => &mut self.severity,
            FireComponent::Area => &mut self.area,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(FireComponent, &T) -> U) -> FireRegime<U> {
        FireRegime {
            size: f(FireComponent::Size, &self.size),
            frequency: f(FireComponent::Frequency, &self.frequency),
            severity: f(FireComponent::Severity, &self.severity),
            area: f(FireComponent::Area, &self.area),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FireComponent, &T)> {
        FireComponent::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

/// One value per ecosystem/fuel component (the 8 response-matrix columns).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct TargetSet<T> {
    pub survivorship: T,
    pub recruitment: T,
    pub erosion: T,
    pub composition: T,
    pub structure: T,
    pub loading: T,
    pub horizontal: T,
    pub vertical: T,
}

impl<T> TargetSet<T> {
    pub fn get(&self, component: TargetComponent) -> &T {
        match component {
            TargetComponent::Ecosystem(EcosystemComponent::Survivorship) => &self.survivorship,
            TargetComponent::Ecosystem(EcosystemComponent::Recruitment) => &self.recruitment,
            TargetComponent::Ecosystem(EcosystemComponent::Erosion) => &self.erosion,
            TargetComponent::Ecosystem(EcosystemComponent::Composition) => &self.composition,
            TargetComponent::Ecosystem(EcosystemComponent::Structure) => &self.structure,
            TargetComponent::Fuel(FuelComponent::Loading) => &self.loading,
            TargetComponent::Fuel(FuelComponent::Horizontal) => &self.horizontal,
            TargetComponent::Fuel(FuelComponent::Vertical) => &self.vertical,
        }
    }

    pub fn get_mut(&mut self, component: TargetComponent) -> &mut T {
        match component {
            TargetComponent::Ecosystem(EcosystemComponent::Survivorship) => &mut self.survivorship,
            TargetComponent::Ecosystem(EcosystemComponent::Recruitment) => &mut self.recruitment,
            TargetComponent::Ecosystem(EcosystemComponent::Erosion) => &mut self.erosion,
            TargetComponent::Ecosystem(EcosystemComponent::Composition) => &mut self.composition,
            TargetComponent::Ecosystem(EcosystemComponent::Structure) => &mut self.structure,
            TargetComponent::Fuel(FuelComponent::Loading) => &mut self.loading,
            TargetComponent::Fuel(FuelComponent::Horizontal) => &mut self.horizontal,
            TargetComponent::Fuel(FuelComponent::Vertical) => &mut self.vertical,
        }
    }

    pub fn ecosystem(&self, component: EcosystemComponent) -> &T {
        self.get(TargetComponent::Ecosystem(component))
    }

    pub fn fuel(&self, component: FuelComponent) -> &T {
        self.get(TargetComponent::Fuel(component))
    }

    pub fn map<U>(&self, mut f: impl FnMut(TargetComponent, &T) -> U) -> TargetSet<U> {
        TargetSet {
            survivorship: f(
                TargetComponent::Ecosystem(EcosystemComponent::Survivorship),
                &self.survivorship,
            ),
            recruitment: f(
                TargetComponent::Ecosystem(EcosystemComponent::Recruitment),
                &self.recruitment,
            ),
            erosion: f(
                TargetComponent::Ecosystem(EcosystemComponent::Erosion),
                &self.erosion,
            ),
            composition: f(
                TargetComponent::Ecosystem(EcosystemComponent::Composition),
                &self.composition,
            ),
            structure: f(
                TargetComponent::Ecosystem(EcosystemComponent::Structure),
                &self.structure,
            ),
            loading: f(TargetComponent::Fuel(FuelComponent::Loading), &self.loading),
            horizontal: f(
                TargetComponent::Fuel(FuelComponent::Horizontal),
                &self.horizontal,
            ),
            vertical: f(
                TargetComponent::Fuel(FuelComponent::Vertical),
                &self.vertical,
            ),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TargetComponent, &T)> {
        TargetComponent::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}
