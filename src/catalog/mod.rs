//! Static knowledge tables.
//!
//! Three read-only tables drive the engine:
//!
//! - [`TopicCatalog`]: subject → ordered topic list (earlier = foundational,
//!   consumed first)
//! - [`ResourceCatalog`]: subject → learning resources tagged by track
//! - [`TrackWeights`]: track → base subject importance weights
//!   (domain-tuned constants)
//!
//! They are bundled into a [`KnowledgeBase`] that is passed into the engine
//! as immutable configuration, so tests can substitute their own tables.
//! `Default` carries the built-in data; [`KnowledgeBase::load_or_init`]
//! (in `store`) persists and reloads it as JSON.

mod store;

pub use store::StoreError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Resource, Subject, Track};

/// Ordered topic lists per subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicCatalog {
    topics: BTreeMap<Subject, Vec<String>>,
}

impl TopicCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            topics: BTreeMap::new(),
        }
    }

    /// Sets the topic list for a subject.
    pub fn with_topics<I, S>(mut self, subject: Subject, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics
            .insert(subject, topics.into_iter().map(Into::into).collect());
        self
    }

    /// Topics for a subject, foundational first. Empty if the subject has no
    /// catalog entry.
    pub fn topics_for(&self, subject: Subject) -> &[String] {
        self.topics.get(&subject).map_or(&[], Vec::as_slice)
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::new()
            .with_topics(
                Subject::Mathematics,
                [
                    "Basic Concepts",
                    "Number Systems",
                    "Divisibility",
                    "GCD and LCM",
                    "Rational Numbers",
                    "Equations",
                    "Absolute Value",
                    "Exponents",
                    "Radicals",
                    "Ratio and Proportion",
                    "Word Problems",
                ],
            )
            .with_topics(
                Subject::Geometry,
                [
                    "Angles",
                    "Triangles",
                    "Quadrilaterals",
                    "Polygons",
                    "Circles",
                    "Solid Geometry",
                ],
            )
            .with_topics(
                Subject::Physics,
                [
                    "Introduction to Physics",
                    "Matter and Its Properties",
                    "Force and Motion",
                    "Energy",
                    "Electricity and Magnetism",
                ],
            )
            .with_topics(
                Subject::Chemistry,
                [
                    "Atomic Structure and the Periodic Table",
                    "Chemical Bonding",
                    "Chemical Calculations",
                    "Acids, Bases, and Salts",
                    "Mixtures",
                ],
            )
            .with_topics(
                Subject::Biology,
                [
                    "Foundations of Life",
                    "The Cell",
                    "Classification of Living Things",
                    "Human Physiology",
                    "Ecosystems",
                ],
            )
            .with_topics(
                Subject::NativeLanguage,
                [
                    "Word Meaning",
                    "Sentence Meaning",
                    "Reading Comprehension",
                    "Grammar",
                    "Spelling and Punctuation",
                ],
            )
            .with_topics(
                Subject::SocialStudies,
                [
                    "History Foundations",
                    "Geography Foundations",
                    "Philosophy",
                    "Culture and Ethics",
                ],
            )
            .with_topics(
                Subject::ForeignLanguage,
                [
                    "Vocabulary",
                    "Grammar",
                    "Reading",
                    "Use of English",
                    "Listening",
                ],
            )
    }
}

/// Learning resources per subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceCatalog {
    resources: BTreeMap<Subject, Vec<Resource>>,
}

impl ResourceCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            resources: BTreeMap::new(),
        }
    }

    /// Sets the resource list for a subject.
    pub fn with_resources(mut self, subject: Subject, resources: Vec<Resource>) -> Self {
        self.resources.insert(subject, resources);
        self
    }

    /// Resources for a subject, in catalog order. Empty if the subject has
    /// no entry.
    pub fn resources_for(&self, subject: Subject) -> &[Resource] {
        self.resources.get(&subject).map_or(&[], Vec::as_slice)
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        use Track::{Language, QuantVerbal, Quantitative, Verbal};

        Self::new()
            .with_resources(
                Subject::Mathematics,
                vec![
                    Resource::book("Core Mathematics Question Bank", "Crosspoint Press")
                        .with_tracks([Quantitative, QuantVerbal]),
                    Resource::video("Mathematics Fundamentals", "YouTube")
                        .with_url("https://www.youtube.com/@mathfundamentals")
                        .with_tracks([Quantitative, QuantVerbal]),
                    Resource::web("Khan Academy — Mathematics", "Khan Academy")
                        .with_url("https://www.khanacademy.org/math")
                        .with_tracks([Quantitative, QuantVerbal]),
                ],
            )
            .with_resources(
                Subject::Geometry,
                vec![
                    Resource::book("Advanced Geometry Question Bank", "Apex Press")
                        .with_tracks([Quantitative, QuantVerbal]),
                    Resource::video("Geometry in Depth", "YouTube")
                        .with_url("https://www.youtube.com/@geometryindepth")
                        .with_tracks([Quantitative, QuantVerbal]),
                ],
            )
            .with_resources(
                Subject::Physics,
                vec![
                    Resource::book("Advanced Physics Question Bank", "Northlight Press")
                        .with_tracks([Quantitative]),
                    Resource::video("Physics Lab", "YouTube")
                        .with_url("https://www.youtube.com/@physicslab")
                        .with_tracks([Quantitative]),
                ],
            )
            .with_resources(
                Subject::Chemistry,
                vec![
                    Resource::book("Advanced Chemistry Question Bank", "Endemic Press")
                        .with_tracks([Quantitative]),
                    Resource::video("Chemistry Island", "YouTube")
                        .with_url("https://www.youtube.com/@chemistryisland")
                        .with_tracks([Quantitative]),
                ],
            )
            .with_resources(
                Subject::Biology,
                vec![
                    Resource::book("Advanced Biology Question Bank", "Spiral Press")
                        .with_tracks([Quantitative]),
                    Resource::video("Biology Prep", "YouTube")
                        .with_url("https://www.youtube.com/@biologyprep")
                        .with_tracks([Quantitative]),
                ],
            )
            .with_resources(
                Subject::NativeLanguage,
                vec![
                    Resource::book("Reading Comprehension Drills", "Paragraph Press")
                        .with_tracks([Quantitative, QuantVerbal, Verbal, Language]),
                    Resource::video("Comprehension Practice", "YouTube")
                        .with_url("https://www.youtube.com/@comprehensionpractice")
                        .with_tracks([Quantitative, QuantVerbal, Verbal, Language]),
                ],
            )
            .with_resources(
                Subject::SocialStudies,
                vec![
                    Resource::book("Social Studies Question Bank", "Spiral Press")
                        .with_tracks([QuantVerbal, Verbal]),
                    Resource::video("Social Studies Prep", "YouTube")
                        .with_url("https://www.youtube.com/@socialstudiesprep")
                        .with_tracks([QuantVerbal, Verbal]),
                ],
            )
            .with_resources(
                Subject::ForeignLanguage,
                vec![
                    Resource::book("Exam Vocabulary Builder", "Modus Press")
                        .with_tracks([Language]),
                    Resource::web("Cambridge English Practice", "Cambridge")
                        .with_url("https://www.cambridgeenglish.org")
                        .with_tracks([Language]),
                ],
            )
    }
}

/// Base subject importance weights per track.
///
/// The weights are domain-tuned constants, not derived from data. After
/// level adjustment they are normalized to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackWeights {
    weights: BTreeMap<Track, BTreeMap<Subject, f64>>,
}

impl TrackWeights {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Sets the base weight mapping for a track.
    pub fn with_track<I>(mut self, track: Track, weights: I) -> Self
    where
        I: IntoIterator<Item = (Subject, f64)>,
    {
        self.weights.insert(track, weights.into_iter().collect());
        self
    }

    /// Base weights for a track, if the table has an entry.
    pub fn for_track(&self, track: Track) -> Option<&BTreeMap<Subject, f64>> {
        self.weights.get(&track)
    }
}

impl Default for TrackWeights {
    fn default() -> Self {
        use Subject::*;

        Self::new()
            .with_track(
                Track::Quantitative,
                [
                    (Mathematics, 1.0),
                    (Geometry, 0.8),
                    (Physics, 1.0),
                    (Chemistry, 0.9),
                    (Biology, 0.9),
                    (NativeLanguage, 0.6),
                    (SocialStudies, 0.4),
                    (ForeignLanguage, 0.3),
                ],
            )
            .with_track(
                Track::QuantVerbal,
                [
                    (Mathematics, 1.0),
                    (Geometry, 0.9),
                    (NativeLanguage, 0.9),
                    (SocialStudies, 0.8),
                    (Physics, 0.4),
                    (Chemistry, 0.4),
                    (Biology, 0.4),
                    (ForeignLanguage, 0.3),
                ],
            )
            .with_track(
                Track::Verbal,
                [
                    (NativeLanguage, 1.0),
                    (SocialStudies, 1.0),
                    (Mathematics, 0.5),
                    (Geometry, 0.5),
                    (ForeignLanguage, 0.4),
                    (Physics, 0.2),
                    (Chemistry, 0.2),
                    (Biology, 0.2),
                ],
            )
            .with_track(
                Track::Language,
                [
                    (ForeignLanguage, 1.0),
                    (NativeLanguage, 0.7),
                    (SocialStudies, 0.5),
                    (Mathematics, 0.4),
                    (Geometry, 0.4),
                    (Physics, 0.2),
                    (Chemistry, 0.2),
                    (Biology, 0.2),
                ],
            )
    }
}

/// The complete set of knowledge tables the engine reads.
///
/// Immutable once constructed. Passed into [`crate::scheduler::Planner`] so
/// callers (and tests) control exactly which tables are in effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Topic lists per subject.
    pub topics: TopicCatalog,
    /// Learning resources per subject.
    pub resources: ResourceCatalog,
    /// Base importance weights per track.
    pub track_weights: TrackWeights,
}

impl KnowledgeBase {
    /// Creates a knowledge base from explicit tables.
    pub fn new(topics: TopicCatalog, resources: ResourceCatalog, track_weights: TrackWeights) -> Self {
        Self {
            topics,
            resources,
            track_weights,
        }
    }
}
