pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{alert_builder::*, source_builder::*};

pub mod source_builder {

    use super::*;
    use crate::{geo::*, id::*, quality::*, source::*, time::*};

    #[derive(Debug)]
    pub struct WaterSourceBuild {
        source: WaterSource,
    }

    impl WaterSourceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.source.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.source.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.source.pos = pos;
            self
        }
        pub fn source_type(mut self, source_type: SourceType) -> Self {
            self.source.source_type = source_type;
            self
        }
        pub fn classification(mut self, label: QualityLabel, confidence: f64) -> Self {
            self.source.classification = Some(Classification {
                label,
                confidence: Confidence::new(confidence),
            });
            self
        }
        pub fn admin_override(mut self, label: QualityLabel) -> Self {
            self.source.admin_override = Some(label);
            self
        }
        pub fn created_by(mut self, author: &str) -> Self {
            self.source.created_by = author.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.source.created_at = created_at;
            self
        }
        pub fn notes(mut self, notes: &str) -> Self {
            self.source.notes = notes.into();
            self
        }
        pub fn finish(self) -> WaterSource {
            self.source
        }
    }

    impl Builder for WaterSource {
        type Build = WaterSourceBuild;
        fn build() -> WaterSourceBuild {
            WaterSourceBuild {
                source: WaterSource {
                    id: Id::new(),
                    created_at: Timestamp::now(),
                    created_by: "Anonymous".into(),
                    name: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    source_type: SourceType::Well,
                    classification: None,
                    notes: "".into(),
                    photo: None,
                    admin_override: None,
                },
            }
        }
    }
}

pub mod alert_builder {

    use super::*;
    use crate::{alert::*, geo::*, id::*, time::*};

    #[derive(Debug)]
    pub struct AlertBuild {
        alert: Alert,
    }

    impl AlertBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.alert.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.alert.title = title.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.alert.pos = pos;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.alert.created_at = created_at;
            self
        }
        pub fn finish(self) -> Alert {
            self.alert
        }
    }

    impl Builder for Alert {
        type Build = AlertBuild;
        fn build() -> Self::Build {
            AlertBuild {
                alert: Alert {
                    id: Id::new(),
                    created_at: Timestamp::now(),
                    created_by: "admin".into(),
                    title: "".into(),
                    message: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                },
            }
        }
    }
}
