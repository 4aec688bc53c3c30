//! Swagger 2.0 specification document assembly.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{
    bundle::{Bundle, Info, Scheme},
    model::{ApiModel, HttpMethod, ModelDefinition, Operation},
};

pub const SWAGGER_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The artifact written by the emission stage.
///
/// All maps are ordered so two runs over the same input serialise
/// byte-for-byte identically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationDocument {
    pub swagger: &'static str,
    pub info: Info,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub base_path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<Scheme>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    pub paths: BTreeMap<String, BTreeMap<HttpMethod, Operation>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub definitions: BTreeMap<String, ModelDefinition>,
}

impl SpecificationDocument {
    /// Assemble the document for `bundle` from its loaded model.
    ///
    /// `base_path` is the effective publish path, which may differ from the
    /// bundle's configured base path.
    pub fn assemble(bundle: &Bundle, model: &ApiModel, base_path: &str) -> Self {
        Self {
            swagger: SWAGGER_VERSION,
            info: bundle.info().clone(),
            host: bundle.host().map(str::to_string),
            base_path: base_path.to_string(),
            schemes: bundle.schemes().to_vec(),
            tags: model
                .tags()
                .map(|(name, description)| Tag {
                    name: name.to_string(),
                    description: description.map(str::to_string),
                })
                .collect(),
            paths: model.paths(),
            definitions: model.definitions().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BundleConfig, ConfigValidator, InfoConfig,
        model::{Response, Schema},
    };

    fn bundle() -> Bundle {
        ConfigValidator::validate(Some(&BundleConfig {
            info: Some(InfoConfig {
                title: Some("Petstore".into()),
                version: Some("1.0.0".into()),
                ..InfoConfig::default()
            }),
            base_path: Some("/v1".into()),
            host: Some("api.example.com".into()),
            locations: Some(vec!["com.example.pets".into()]),
            ..BundleConfig::default()
        }))
        .unwrap()
    }

    fn model() -> ApiModel {
        let mut responses = BTreeMap::new();
        responses.insert(
            "200".to_string(),
            Response {
                description: "ok".into(),
                schema: Some(Schema {
                    reference: Some("#/definitions/Pet".into()),
                    ..Schema::default()
                }),
            },
        );
        let mut model = ApiModel::new();
        model.add_operation(Operation {
            method: HttpMethod::Get,
            path: "/pets/{id}".into(),
            tags: vec!["pets".into()],
            summary: Some("Find pet".into()),
            description: None,
            operation_id: Some("getPet".into()),
            parameters: Vec::new(),
            responses,
            deprecated: false,
        });
        model.add_definition("Pet", ModelDefinition::default());
        model
    }

    #[test]
    fn document_uses_given_base_path() {
        let doc = SpecificationDocument::assemble(&bundle(), &model(), "/v2");
        assert_eq!(doc.base_path, "/v2");
        assert_eq!(doc.swagger, "2.0");
        assert_eq!(doc.host.as_deref(), Some("api.example.com"));
    }

    #[test]
    fn document_serialises_swagger_shape() {
        let doc = SpecificationDocument::assemble(&bundle(), &model(), "/v1");
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["swagger"], "2.0");
        assert_eq!(json["basePath"], "/v1");
        assert_eq!(json["info"]["title"], "Petstore");
        let get = &json["paths"]["/pets/{id}"]["get"];
        assert_eq!(get["operationId"], "getPet");
        assert_eq!(
            get["responses"]["200"]["schema"]["$ref"],
            "#/definitions/Pet"
        );
        assert!(get.get("method").is_none());
        assert!(get.get("deprecated").is_none());
        assert_eq!(json["definitions"]["Pet"]["type"], "object");
        assert_eq!(json["tags"][0]["name"], "pets");
    }

    #[test]
    fn document_serialises_to_yaml() {
        let doc = SpecificationDocument::assemble(&bundle(), &model(), "/v1");
        let yaml = serde_yaml::to_string(&doc).unwrap();
        assert!(yaml.starts_with("swagger:"));
        assert!(yaml.contains("2.0"));
        assert!(yaml.contains("basePath: /v1"));
    }
}
