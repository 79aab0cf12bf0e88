//! OpenAPI 3.0 description of the IPCA API.
//!
//! Served at `GET /swagger.json`.

use serde_json::{json, Value};

/// Public API version, independent of the crate version.
pub const API_VERSION: &str = "1.0";

pub const API_TITLE: &str = "IPCA API";

pub const API_DESCRIPTION: &str = "API para cálculo e consulta de IPCA";

pub fn openapi_spec() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "description": API_DESCRIPTION,
            "version": API_VERSION
        },
        "tags": [
            { "name": "ipca", "description": "Operações relacionadas ao IPCA" }
        ],
        "components": {
            "schemas": {
                "NormalizedRecord": {
                    "type": "object",
                    "required": ["variable", "value", "date", "Mes-ano"],
                    "properties": {
                        "variable": { "type": "string", "example": "Var. mensal (%)" },
                        "value": { "type": "number", "example": 0.42 },
                        "date": { "type": "string", "description": "dd/mm/yyyy", "example": "01/03/2024" },
                        "Mes-ano": { "type": "string", "description": "YYYY-MM", "example": "2024-03" }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["requestId", "status", "error"],
                    "properties": {
                        "requestId": { "type": "string", "format": "uuid" },
                        "status": { "type": "string", "enum": ["error"] },
                        "error": { "type": "string" }
                    }
                }
            }
        },
        "paths": {
            "/ipca/mensal": {
                "get": {
                    "tags": ["ipca"],
                    "operationId": "getIpcaMensal",
                    "summary": "Retorna a variável 'Var. mensal (%)' com data no formato dd/mm/yyyy",
                    "description": "Monthly IPCA variation after 2016-01-01, fetched from IBGE SIDRA on every request.",
                    "responses": {
                        "200": {
                            "description": "Monthly records in upstream order",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/NormalizedRecord" }
                                    }
                                }
                            }
                        },
                        "500": {
                            "description": "An upstream row could not be parsed",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/Error" } }
                            }
                        },
                        "502": {
                            "description": "SIDRA unreachable or returned an unexpected response",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/Error" } }
                            }
                        }
                    }
                }
            },
            "/health": {
                "get": {
                    "operationId": "health",
                    "summary": "Health check",
                    "responses": {
                        "200": { "description": "Service is up" }
                    }
                }
            },
            "/swagger.json": {
                "get": {
                    "operationId": "openapi",
                    "summary": "This document",
                    "responses": {
                        "200": { "description": "OpenAPI document" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_block() {
        let spec = openapi_spec();
        assert_eq!(spec["info"]["title"], "IPCA API");
        assert_eq!(spec["info"]["version"], "1.0");
        assert_eq!(spec["info"]["description"], "API para cálculo e consulta de IPCA");
        assert_eq!(spec["tags"][0]["name"], "ipca");
    }

    #[test]
    fn test_record_schema_matches_serialized_keys() {
        let spec = openapi_spec();
        let properties = spec["components"]["schemas"]["NormalizedRecord"]["properties"]
            .as_object()
            .unwrap();
        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        for key in ["variable", "value", "date", "Mes-ano"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_error_responses_documented() {
        let spec = openapi_spec();
        let responses = &spec["paths"]["/ipca/mensal"]["get"]["responses"];
        for code in ["200", "500", "502"] {
            assert!(responses.get(code).is_some(), "missing {code}");
        }
    }
}
