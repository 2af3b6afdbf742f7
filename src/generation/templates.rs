use serde::{Deserialize, Serialize};

use crate::corpus::{LEASE_CONTEXT_ID, SERVICES_CONTEXT_ID};
use crate::types::search_result::Query;

const LEASE_BODY: &str = include_str!("templates/lease.txt");
const SERVICES_BODY: &str = include_str!("templates/services.txt");

/// The fixed documents the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Lease,
    Services,
}

/// One step of the generation progress shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationStage {
    pub label: &'static str,
    pub description: &'static str,
}

const LEASE_STAGES: [GenerationStage; 3] = [
    GenerationStage {
        label: "Retrieving Context",
        description: "Finding lease agreement template...",
    },
    GenerationStage {
        label: "AI Processing",
        description: "Generating legal document...",
    },
    GenerationStage {
        label: "Document Ready",
        description: "Lease agreement created successfully!",
    },
];

const SERVICES_STAGES: [GenerationStage; 3] = [
    GenerationStage {
        label: "Retrieving Context",
        description: "Finding services contract template...",
    },
    GenerationStage {
        label: "AI Processing",
        description: "Generating services agreement...",
    },
    GenerationStage {
        label: "Document Ready",
        description: "Contract created successfully!",
    },
];

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Lease, TemplateKind::Services];

    /// Resolve the tag a contract-type picker hands over.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "lease" => Some(TemplateKind::Lease),
            "services" => Some(TemplateKind::Services),
            _ => None,
        }
    }

    /// Recognise a request for one of the templates in free text.
    ///
    /// A lease request names a lease plus an agreement or contract. A services
    /// request names services or supply plus an agreement or contract. Lease
    /// is checked first.
    pub fn detect(query: &Query) -> Option<Self> {
        let text = query.raw.to_lowercase();
        let is_document = text.contains("agreement") || text.contains("contract");
        if !is_document {
            return None;
        }

        if text.contains("lease") {
            Some(TemplateKind::Lease)
        } else if text.contains("services") || text.contains("supply") {
            Some(TemplateKind::Services)
        } else {
            None
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            TemplateKind::Lease => "lease",
            TemplateKind::Services => "services",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TemplateKind::Lease => "Lease Agreement",
            TemplateKind::Services => "Services & Supply Contract",
        }
    }

    /// Corpus entry holding the context template this document is built from.
    pub fn context_document_id(self) -> &'static str {
        match self {
            TemplateKind::Lease => LEASE_CONTEXT_ID,
            TemplateKind::Services => SERVICES_CONTEXT_ID,
        }
    }

    pub fn stages(self) -> &'static [GenerationStage] {
        match self {
            TemplateKind::Lease => &LEASE_STAGES,
            TemplateKind::Services => &SERVICES_STAGES,
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            TemplateKind::Lease => LEASE_BODY.trim_end(),
            TemplateKind::Services => SERVICES_BODY.trim_end(),
        }
    }
}
