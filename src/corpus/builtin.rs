use crate::document::{Document, DocumentId};

use super::Corpus;

pub const LEASE_CONTEXT_ID: &str = "lease-context";
pub const SERVICES_CONTEXT_ID: &str = "services-contract-context";

impl Corpus {
    /// The compiled-in demo corpus: two contract context templates and five
    /// product documentation entries.
    pub fn builtin() -> Self {
        let documents = builtin_documents();
        debug_assert!(Corpus::new(documents.clone()).is_ok(), "builtin ids must be unique");
        Corpus::from_unique(documents)
    }
}

fn builtin_documents() -> Vec<Document> {
    vec![
        Document::new(
            DocumentId::from_static(LEASE_CONTEXT_ID),
            "Legal Lease Agreement Context Template",
            "You are an expert legal document generator. Create a lease document with the following structure and content requirements: Document Type: [Initial Lease / Amendment / Restatement / Joinder / Termination], Edition Number: [e.g. 1st, 2nd, 5th, Restated], Jurisdiction: [Country and legal context, e.g. Sweden]. Required Sections: Preamble, Recitals, Agreement Clauses including Premises, Term, Rent, Operating Expenses, and Execution.",
            "Legal Document Templates",
        )
        .with_key_takeaways([
            "Always include document type and edition number",
            "Structure with Preamble, Recitals, and Agreement sections",
            "Include premises description with square meters",
            "Specify clear term dates and rent amounts",
            "Add proper execution signatures",
        ])
        .with_keywords([
            "lease", "agreement", "rental", "contract", "legal", "property", "tenant", "landlord",
        ]),
        Document::new(
            DocumentId::from_static(SERVICES_CONTEXT_ID),
            "Services and Supply Contract Context Template",
            "You are an expert legal document generator. Create a services and supply contract agreement with the following structure and content requirements: Document Type: Services and Supply Contract Agreement, Edition Number: [e.g. 1st, 2nd, Restated], Jurisdiction: [Country and legal context, e.g. Sweden]. Required Sections: Preamble, Recitals, Agreement Clauses including Parties, Scope of Services, Governance, Commercial Terms, Performance Obligations, Warranties, Confidentiality, Dispute Resolution, Term & Termination, Force Majeure, General Provisions, and Execution.",
            "Legal Document Templates",
        )
        .with_key_takeaways([
            "Include parties with registration numbers and jurisdictions",
            "Define scope of services and deliverables clearly",
            "Specify commercial terms and pricing model",
            "Include performance obligations and SLAs",
            "Add confidentiality and IP ownership clauses",
            "Define dispute resolution and governing law",
        ])
        .with_keywords([
            "services", "supply", "contract", "agreement", "legal", "commercial", "deliverables",
            "supplier", "client",
        ]),
        Document::new(
            DocumentId::from_static("doc-1"),
            "API Authentication Guide",
            "Our API uses token-based authentication with JWT tokens. To authenticate, include the Authorization header with 'Bearer <token>' in your requests. Tokens expire after 24 hours and need to be refreshed using the /auth/refresh endpoint.",
            "API Documentation",
        )
        .with_key_takeaways([
            "Use JWT tokens for API authentication",
            "Include Authorization header with Bearer token",
            "Tokens expire after 24 hours",
            "Use /auth/refresh endpoint to renew tokens",
        ])
        .with_keywords([
            "authentication", "api", "jwt", "token", "auth", "bearer", "login", "security",
        ]),
        Document::new(
            DocumentId::from_static("doc-2"),
            "Getting Started with Webhooks",
            "Webhooks allow your application to receive real-time notifications when events occur. To set up webhooks, configure your endpoint URL in the dashboard and select which events to listen for. We'll send HTTP POST requests to your endpoint with event data.",
            "Integration Guide",
        )
        .with_key_takeaways([
            "Webhooks provide real-time event notifications",
            "Configure endpoint URL in dashboard",
            "Select specific events to listen for",
            "Receives HTTP POST requests with event data",
        ])
        .with_keywords([
            "webhooks", "notifications", "events", "real-time", "endpoint", "integration", "setup",
        ]),
        Document::new(
            DocumentId::from_static("doc-3"),
            "Plugin Development Framework",
            "The plugin framework allows developers to extend functionality through custom plugins. Plugins must implement the PluginInterface and be registered in the plugins.json configuration file. Each plugin has access to the core API and can define custom hooks and filters.",
            "Developer Documentation",
        )
        .with_key_takeaways([
            "Implement PluginInterface for custom plugins",
            "Register plugins in plugins.json config file",
            "Plugins have access to core API",
            "Can define custom hooks and filters",
        ])
        .with_keywords([
            "plugin", "framework", "development", "extend", "custom", "interface", "api", "hooks",
            "filters",
        ]),
        Document::new(
            DocumentId::from_static("doc-4"),
            "Onboarding User Flow Best Practices",
            "Effective user onboarding should be progressive, contextual, and value-focused. Start with core features, provide tooltips and guided tours, and celebrate early wins. Collect user feedback and iterate based on completion rates and user behavior analytics.",
            "UX Design Guide",
        )
        .with_key_takeaways([
            "Make onboarding progressive and contextual",
            "Focus on demonstrating value early",
            "Use tooltips and guided tours",
            "Celebrate user achievements and wins",
            "Iterate based on analytics and feedback",
        ])
        .with_keywords([
            "onboarding", "user experience", "ux", "flow", "guide", "tutorial", "progressive",
            "contextual",
        ]),
        Document::new(
            DocumentId::from_static("doc-5"),
            "Database Migration Strategy",
            "Database migrations should be versioned, reversible, and tested thoroughly. Use incremental migrations for large datasets, maintain backwards compatibility during transitions, and always backup before major schema changes. Document all migration steps and rollback procedures.",
            "Database Documentation",
        )
        .with_key_takeaways([
            "Version and document all migrations",
            "Ensure migrations are reversible",
            "Use incremental approach for large datasets",
            "Maintain backwards compatibility",
            "Always backup before schema changes",
        ])
        .with_keywords([
            "database", "migration", "schema", "backup", "versioning", "rollback", "compatibility",
        ]),
    ]
}
