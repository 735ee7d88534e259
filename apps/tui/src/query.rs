use crate::cascade::CascadeClient;
use crate::domain::StageStatus;
use crate::error::CascadeError;
use crate::http::ErrorView;
use crate::poller::StatusPoller;
use crate::schedule::ScheduleTable;
use serde::Serialize;

/// One-shot cascade lookup, as driven from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub province: Option<String>,
    pub municipality: Option<String>,
    pub place: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    Provinces {
        names: Vec<String>,
    },
    Municipalities {
        province: String,
        names: Vec<String>,
    },
    Places {
        municipality: String,
        names: Vec<String>,
    },
    Schedule {
        province: String,
        place: String,
        table: ScheduleTable,
    },
    Error(ErrorView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub stage: Option<StageStatus>,
    pub answer: Answer,
}

impl Query {
    /// Runs one stage poll and the cascade step the given names select.
    ///
    /// HTTP rejections become [`Answer::Error`]; anything else is returned.
    pub async fn run(
        &self,
        client: &CascadeClient,
        poller: &StatusPoller,
        date_format: &str,
    ) -> Result<Report, CascadeError> {
        let stage = match poller.poll_once().await {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::debug!(error = %e, "stage poll failed");
                None
            }
        };

        let answer = match self.answer(client, date_format).await {
            Ok(answer) => answer,
            Err(e) => match e.error_view() {
                Some(view) => Answer::Error(view),
                None => return Err(e),
            },
        };

        Ok(Report { stage, answer })
    }

    async fn answer(
        &self,
        client: &CascadeClient,
        date_format: &str,
    ) -> Result<Answer, CascadeError> {
        match (&self.province, &self.municipality, &self.place) {
            (Some(province), _, Some(place)) => {
                let doc = client.schedule(province, place).await?;
                let mut table = ScheduleTable::new(date_format);
                if let Err(e) = table.render(&doc) {
                    tracing::warn!(%province, %place, error = %e, "schedule not rendered");
                }
                Ok(Answer::Schedule {
                    province: province.clone(),
                    place: place.clone(),
                    table,
                })
            }
            (_, Some(municipality), None) => Ok(Answer::Places {
                municipality: municipality.clone(),
                names: client.places(municipality).await?,
            }),
            (Some(province), None, None) => Ok(Answer::Municipalities {
                province: province.clone(),
                names: client.municipalities(province).await?,
            }),
            (None, _, _) => Ok(Answer::Provinces {
                names: client.provinces().await?,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpReply;
    use crate::locator::Locator;
    use crate::store::status_store;
    use crate::testing::{discovery_url, ScriptedTransport};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn services() -> ScriptedTransport {
        let transport = ScriptedTransport::new();
        transport.reply(
            "http://discovery.test/url/places",
            HttpReply::json(&json!("http://places.test")),
        );
        transport.reply(
            "http://discovery.test/url/schedule",
            HttpReply::json(&json!("http://schedule.test")),
        );
        transport
    }

    fn run_against(
        transport: ScriptedTransport,
    ) -> (CascadeClient, StatusPoller) {
        let locator = Locator::new(Arc::new(transport), discovery_url());
        let (writer, _) = status_store();
        (
            CascadeClient::new(locator.clone()),
            StatusPoller::new(locator, writer, Duration::from_secs(5)),
        )
    }

    #[tokio::test]
    async fn names_pick_the_cascade_step() -> Result<(), Box<dyn std::error::Error>> {
        let transport = services();
        transport.reply(
            "http://places.test/provinces",
            HttpReply::json(&json!([{ "name": "Gauteng" }])),
        );
        transport.reply(
            "http://places.test/municipalities/Gauteng",
            HttpReply::json(&json!([{ "name": "Tshwane" }])),
        );
        transport.reply(
            "http://places.test/places/municipality/Tshwane",
            HttpReply::json(&json!([{ "name": "Pretoria" }])),
        );
        let (client, poller) = run_against(transport);

        let report = Query::default().run(&client, &poller, "%Y-%m-%d").await?;
        assert_eq!(report.stage, None);
        assert_eq!(
            report.answer,
            Answer::Provinces {
                names: vec!["Gauteng".to_string()]
            }
        );

        let query = Query {
            province: Some("Gauteng".to_string()),
            ..Query::default()
        };
        let report = query.run(&client, &poller, "%Y-%m-%d").await?;
        assert!(matches!(report.answer, Answer::Municipalities { ref names, .. } if names == &["Tshwane"]));

        let query = Query {
            municipality: Some("Tshwane".to_string()),
            ..Query::default()
        };
        let report = query.run(&client, &poller, "%Y-%m-%d").await?;
        assert!(matches!(report.answer, Answer::Places { ref names, .. } if names == &["Pretoria"]));
        Ok(())
    }

    #[tokio::test]
    async fn schedule_lookups_render_the_table() -> Result<(), Box<dyn std::error::Error>> {
        let transport = services();
        transport.reply(
            "http://schedule.test/Gauteng/Pretoria",
            HttpReply::json(&json!({
                "startDate": [2023, 12, 31],
                "days": [{"slots": []}, {"slots": [{"start": [18, 0], "end": [20, 30]}]}]
            })),
        );
        let (client, poller) = run_against(transport);
        let query = Query {
            province: Some("Gauteng".to_string()),
            municipality: None,
            place: Some("Pretoria".to_string()),
        };

        let report = query.run(&client, &poller, "%Y-%m-%d").await?;
        let Answer::Schedule { table, .. } = report.answer else {
            return Err("expected a schedule".into());
        };
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].label, "2023-12-31");
        assert!(table.rows()[0].slots.is_empty());
        assert_eq!(table.rows()[1].label, "2024-01-01");
        assert_eq!(table.rows()[1].slots, vec!["18:00-20:30"]);
        Ok(())
    }

    #[tokio::test]
    async fn rejections_become_the_error_view() -> Result<(), Box<dyn std::error::Error>> {
        let transport = services();
        transport.reply("http://places.test/provinces", HttpReply::new(503, "down"));
        let (client, poller) = run_against(transport);

        let report = Query::default().run(&client, &poller, "%Y-%m-%d").await?;
        let Answer::Error(view) = report.answer else {
            return Err("expected the error view".into());
        };
        assert_eq!(view.to_string(), "Error 503: Service Unavailable");
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_services_are_still_errors() {
        let (client, poller) = run_against(ScriptedTransport::new());
        let result = Query::default().run(&client, &poller, "%Y-%m-%d").await;
        assert!(matches!(result, Err(CascadeError::Locate(_))));
    }
}
