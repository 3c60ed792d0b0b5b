//! Rollout controller (C6): resolves deployment targets, sequences
//! canary/staged waves, aggregates per-agent status from audit rows, and
//! drives rollback.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;

use crate::config::Settings;
use crate::error::ServerResult;
use crate::model::*;
use crate::protocol::queue_offer;
use crate::registry::{ConnectionRegistry, PendingOffer};
use crate::store::{AgentStore, DeploymentStore};
use crate::wire::DecodedCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DeploymentProgress {
    pub applied: usize,
    pub applying: usize,
    pub failed: usize,
    pub pending: usize,
    pub success_rate: f64,
}

#[derive(Clone)]
pub struct RolloutController {
    agents: AgentStore,
    deployments: DeploymentStore,
    registry: Arc<ConnectionRegistry>,
    settings: Arc<Settings>,
}

impl RolloutController {
    pub fn new(
        agents: AgentStore,
        deployments: DeploymentStore,
        registry: Arc<ConnectionRegistry>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            agents,
            deployments,
            registry,
            settings,
        }
    }

    /// Resolves `spec.target_tags` against `org`'s agent set. Empty tag set
    /// means "every agent in the org" (§4.6).
    pub async fn resolve_targets(&self, org: &str, tags: &[String]) -> ServerResult<Vec<InstanceUid>> {
        let agents = self.agents.list(org, &Default::default()).await?;
        Ok(agents
            .into_iter()
            .filter(|a| tags.is_empty() || tags.iter().any(|t| a.tags.contains(t)))
            .map(|a| a.instance_uid)
            .collect())
    }

    /// Creates the deployment row, supersedes overlapping active deployments,
    /// and hands the actual wave-by-wave rollout to a background task: a
    /// staged rollout can take tens of minutes to settle (each wave polls
    /// audit rows for up to `canary_wave_timeout`), far longer than an HTTP
    /// client should be kept waiting (§4.6). The caller gets back the
    /// deployment row in its `InProgress` state immediately and polls
    /// `/status` for completion, same as the wire protocol's own
    /// offer-then-poll shape.
    pub async fn create_and_run(&self, spec: DeploymentSpec) -> ServerResult<Deployment> {
        let targets = self.resolve_targets(&spec.org, &spec.target_tags).await?;
        let deployment = self.deployments.create(spec.clone(), &targets).await?;
        self.deployments
            .supersede_overlapping(&spec.org, &deployment.id, &targets)
            .await?;

        self.deployments
            .set_status(&deployment.id, DeploymentStatus::InProgress, None)
            .await?;
        let running = Deployment {
            status: DeploymentStatus::InProgress,
            ..deployment.clone()
        };

        let controller = self.clone();
        let background = running.clone();
        tokio::spawn(async move {
            let outcome = match background.rollout_strategy {
                RolloutStrategy::Immediate => controller.run_immediate(&background, &targets).await,
                RolloutStrategy::Canary => controller.run_canary(&background, &targets).await,
                RolloutStrategy::Staged => controller.run_staged(&background, &targets).await,
            };
            let outcome = match outcome {
                Ok(ok) => ok,
                Err(e) => {
                    tracing::error!(error = %e, deployment_id = %background.id, "rollout wave execution failed");
                    return;
                }
            };
            if let Err(e) = controller.finalize(&background, &targets, outcome).await {
                tracing::error!(error = %e, deployment_id = %background.id, "rollout finalize failed");
            }
        });

        Ok(running)
    }

    async fn run_immediate(&self, deployment: &Deployment, targets: &[InstanceUid]) -> ServerResult<bool> {
        self.offer_wave(deployment, targets).await?;
        self.await_wave(deployment, targets, self.settings.canary_wave_timeout)
            .await
    }

    /// §4.6 canary: wave 1 = `ceil(len * pct / 100)` randomly-selected
    /// agents; wave 2 = remainder, gated on wave 1 settling.
    async fn run_canary(&self, deployment: &Deployment, targets: &[InstanceUid]) -> ServerResult<bool> {
        let wave_size = (targets.len() * deployment.canary_percentage as usize).div_ceil(100);
        let mut shuffled = targets.to_vec();
        shuffled.shuffle(&mut rand::rng());
        let (wave1, wave2) = shuffled.split_at(wave_size.min(shuffled.len()));

        self.offer_wave(deployment, wave1).await?;
        let wave1_ok = self
            .await_wave(deployment, wave1, self.settings.canary_wave_timeout)
            .await?;
        if !wave1_ok && !deployment.ignore_failures {
            return Ok(false);
        }

        self.offer_wave(deployment, wave2).await?;
        let wave2_ok = self
            .await_wave(deployment, wave2, self.settings.canary_wave_timeout)
            .await?;
        Ok(wave1_ok && wave2_ok)
    }

    /// Fixed staged waves: 10% -> 50% -> 100%, same gating as canary.
    async fn run_staged(&self, deployment: &Deployment, targets: &[InstanceUid]) -> ServerResult<bool> {
        const STAGES: &[usize] = &[10, 50, 100];
        let mut already_offered: HashSet<InstanceUid> = HashSet::new();
        let mut all_ok = true;

        for pct in STAGES {
            let wave_size = (targets.len() * pct).div_ceil(100);
            let wave: Vec<InstanceUid> = targets
                .iter()
                .filter(|t| !already_offered.contains(*t))
                .take(wave_size.saturating_sub(already_offered.len()))
                .copied()
                .collect();
            if wave.is_empty() {
                continue;
            }
            already_offered.extend(wave.iter().copied());

            self.offer_wave(deployment, &wave).await?;
            let ok = self
                .await_wave(deployment, &wave, self.settings.canary_wave_timeout)
                .await?;
            all_ok &= ok;
            if !ok && !deployment.ignore_failures {
                return Ok(false);
            }
        }
        Ok(all_ok)
    }

    async fn offer_wave(&self, deployment: &Deployment, wave: &[InstanceUid]) -> ServerResult<()> {
        for instance_uid in wave {
            let agent = self.agents.get(&deployment.org, instance_uid).await?;
            let has_capability = agent
                .as_ref()
                .map(|a| {
                    DecodedCapabilities::from_bits(a.agent_capabilities)
                        .has(opamp_proto::proto::AgentCapabilities::AcceptsRemoteConfig)
                })
                .unwrap_or(false);

            if !has_capability {
                self.deployments
                    .set_audit_row(
                        &deployment.id,
                        instance_uid,
                        AuditStatus::Failed,
                        None,
                        Some(CAPABILITY_MISSING_REASON),
                    )
                    .await?;
                continue;
            }

            self.deployments
                .set_audit_row(&deployment.id, instance_uid, AuditStatus::Applying, None, None)
                .await?;
            queue_offer(
                &self.registry,
                *instance_uid,
                PendingOffer {
                    deployment_id: deployment.id.clone(),
                    config_hash: deployment.config_hash.clone(),
                    config_yaml: deployment.config_yaml.clone(),
                },
            );
        }
        Ok(())
    }

    /// Polls audit rows until every agent in `wave` reaches a terminal
    /// status or `timeout` elapses (§5: per-wave timeout, default 10 min).
    ///
    /// §4.6: an agent `offer_wave` skipped for lacking `AcceptsRemoteConfig`
    /// (`CAPABILITY_MISSING_REASON`) "does not count against canary success
    /// if `ignore_failures` is set" — under `ignore_failures` it's excluded
    /// from the wave's failure tally entirely; otherwise it counts as a
    /// failure same as a genuine apply failure. `canary_failure_threshold_pct`
    /// governs the tolerated failure rate among whatever's counted.
    async fn await_wave(
        &self,
        deployment: &Deployment,
        wave: &[InstanceUid],
        timeout: Duration,
    ) -> ServerResult<bool> {
        if wave.is_empty() {
            return Ok(true);
        }
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let rows = self.deployments.list_audit_by_deployment(&deployment.id).await?;
            let row_for = |uid: &InstanceUid| rows.iter().find(|r| &r.instance_uid == uid);

            let settled = wave.iter().all(|uid| {
                row_for(uid)
                    .map(|r| matches!(r.status, AuditStatus::Applied | AuditStatus::Failed))
                    .unwrap_or(false)
            });
            if settled || tokio::time::Instant::now() >= deadline {
                let counted: Vec<&InstanceUid> = wave
                    .iter()
                    .filter(|uid| {
                        if !deployment.ignore_failures {
                            return true;
                        }
                        row_for(uid)
                            .map(|r| r.error.as_deref() != Some(CAPABILITY_MISSING_REASON))
                            .unwrap_or(true)
                    })
                    .collect();
                if counted.is_empty() {
                    return Ok(true);
                }
                let failed = counted
                    .iter()
                    .filter(|uid| {
                        row_for(uid)
                            .map(|r| matches!(r.status, AuditStatus::Failed))
                            .unwrap_or(true)
                    })
                    .count();
                let failure_rate_pct = failed as f64 * 100.0 / counted.len() as f64;
                return Ok(failure_rate_pct <= self.settings.canary_failure_threshold_pct);
            }
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    }

    async fn finalize(
        &self,
        deployment: &Deployment,
        targets: &[InstanceUid],
        wave_outcome: bool,
    ) -> ServerResult<Deployment> {
        if wave_outcome {
            self.deployments
                .set_status(&deployment.id, DeploymentStatus::Completed, None)
                .await?;
        } else {
            self.deployments
                .set_status(&deployment.id, DeploymentStatus::Failed, None)
                .await?;
            if !deployment.ignore_failures {
                self.rollback(deployment, targets).await?;
            }
        }
        self.deployments.get(&deployment.id).await
    }

    /// P8: replaces, on every agent that APPLIED `deployment`, its previous
    /// successful config; agents that never applied it are untouched.
    pub async fn rollback(&self, deployment: &Deployment, targets: &[InstanceUid]) -> ServerResult<Deployment> {
        let mut by_previous_config: std::collections::HashMap<Vec<u8>, (String, Vec<InstanceUid>)> =
            std::collections::HashMap::new();

        for instance_uid in targets {
            let Some(row) = self.deployments.get_audit_row(&deployment.id, instance_uid).await? else {
                continue;
            };
            if !matches!(row.status, AuditStatus::Applied) {
                continue;
            }
            let Some(previous) = self
                .deployments
                .last_applied_before(instance_uid, &deployment.id)
                .await?
            else {
                continue;
            };
            by_previous_config
                .entry(previous.config_hash.clone())
                .or_insert_with(|| (previous.config_yaml.clone(), Vec::new()))
                .1
                .push(*instance_uid);
        }

        let mut last = deployment.clone();
        for (_, (config_yaml, instances)) in by_previous_config {
            let spec = DeploymentSpec {
                org: deployment.org.clone(),
                name: format!("{}-rollback", deployment.name),
                config_yaml,
                rollout_strategy: RolloutStrategy::Immediate,
                canary_percentage: 100,
                target_tags: Vec::new(),
                ignore_failures: true,
            };
            let rollback_deployment = self.deployments.create(spec, &instances).await?;
            self.offer_wave(&rollback_deployment, &instances).await?;
            let ok = self
                .await_wave(&rollback_deployment, &instances, self.settings.canary_wave_timeout)
                .await?;
            self.deployments
                .set_status(
                    &rollback_deployment.id,
                    if ok { DeploymentStatus::Completed } else { DeploymentStatus::Failed },
                    None,
                )
                .await?;
            last = rollback_deployment;
        }

        self.deployments
            .set_status(&deployment.id, DeploymentStatus::RolledBack, None)
            .await?;
        Ok(last)
    }

    pub async fn progress(&self, deployment_id: &str) -> ServerResult<DeploymentProgress> {
        let rows = self.deployments.list_audit_by_deployment(deployment_id).await?;
        let applied = rows.iter().filter(|r| matches!(r.status, AuditStatus::Applied)).count();
        let applying = rows.iter().filter(|r| matches!(r.status, AuditStatus::Applying)).count();
        let failed = rows.iter().filter(|r| matches!(r.status, AuditStatus::Failed)).count();
        let pending = rows.iter().filter(|r| matches!(r.status, AuditStatus::Unset)).count();
        let total = rows.len().max(1);
        Ok(DeploymentProgress {
            applied,
            applying,
            failed,
            pending,
            success_rate: applied as f64 / total as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseConfig;
    use crate::store::agent::AgentPatch;

    fn immediate_spec(org: &str, name: &str, config_yaml: &str, targets_ignore_failures: bool) -> DeploymentSpec {
        DeploymentSpec {
            org: org.to_string(),
            name: name.to_string(),
            config_yaml: config_yaml.to_string(),
            rollout_strategy: RolloutStrategy::Immediate,
            canary_percentage: 100,
            target_tags: Vec::new(),
            ignore_failures: targets_ignore_failures,
        }
    }

    #[tokio::test]
    async fn canary_wave_one_targets_exact_percentage() {
        let pool = DatabaseConfig::for_testing().connect().await.unwrap();
        let agents = AgentStore::new(pool.clone());
        let deployments = DeploymentStore::new(pool.clone());
        let registry = Arc::new(ConnectionRegistry::new());
        let mut settings = Settings::default();
        settings.canary_wave_timeout = Duration::from_millis(20);
        let controller = RolloutController::new(agents.clone(), deployments.clone(), registry, Arc::new(settings));

        let mut targets = Vec::new();
        for i in 0..10u8 {
            let instance_uid = [i; 16];
            agents
                .upsert(
                    "acme",
                    &instance_uid,
                    AgentPatch {
                        sequence_num: 1,
                        agent_capabilities: Some(
                            opamp_proto::proto::AgentCapabilities::AcceptsRemoteConfig as u64,
                        ),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            targets.push(instance_uid);
        }

        let spec = DeploymentSpec {
            canary_percentage: 20,
            rollout_strategy: RolloutStrategy::Canary,
            ..immediate_spec("acme", "canary-d1", "receivers: {}", false)
        };
        let deployment = deployments.create(spec, &targets).await.unwrap();

        let _ = controller.run_canary(&deployment, &targets).await.unwrap();

        let rows = deployments.list_audit_by_deployment(&deployment.id).await.unwrap();
        let offered = rows.iter().filter(|r| !matches!(r.status, AuditStatus::Unset)).count();
        assert_eq!(offered, 2, "ceil(10 * 20 / 100) == 2 targets should be offered in wave 1");
    }

    #[tokio::test]
    async fn rollback_groups_targets_by_distinct_previous_config() {
        let pool = DatabaseConfig::for_testing().connect().await.unwrap();
        let agents = AgentStore::new(pool.clone());
        let deployments = DeploymentStore::new(pool.clone());
        let registry = Arc::new(ConnectionRegistry::new());
        let controller = RolloutController::new(agents, deployments.clone(), registry, Arc::new(Settings::default()));

        let agent_a = [10u8; 16];
        let agent_b = [11u8; 16];

        let prev_a = deployments
            .create(immediate_spec("acme", "prev-a", "receivers: {a: {}}", true), &[agent_a])
            .await
            .unwrap();
        deployments
            .set_audit_row(&prev_a.id, &agent_a, AuditStatus::Applied, Some(&prev_a.config_hash), None)
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        let prev_b = deployments
            .create(immediate_spec("acme", "prev-b", "receivers: {b: {}}", true), &[agent_b])
            .await
            .unwrap();
        deployments
            .set_audit_row(&prev_b.id, &agent_b, AuditStatus::Applied, Some(&prev_b.config_hash), None)
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        let current = deployments
            .create(
                immediate_spec("acme", "current", "receivers: {broken: {}}", true),
                &[agent_a, agent_b],
            )
            .await
            .unwrap();
        deployments
            .set_audit_row(&current.id, &agent_a, AuditStatus::Applied, Some(&current.config_hash), None)
            .await
            .unwrap();
        deployments
            .set_audit_row(&current.id, &agent_b, AuditStatus::Applied, Some(&current.config_hash), None)
            .await
            .unwrap();

        controller.rollback(&current, &[agent_a, agent_b]).await.unwrap();

        let history_a = deployments.list_history_by_agent(&agent_a).await.unwrap();
        let rollback_a = history_a.iter().find(|(d, _)| d.name == "current-rollback").unwrap();
        assert_eq!(rollback_a.0.config_yaml, "receivers: {a: {}}");

        let history_b = deployments.list_history_by_agent(&agent_b).await.unwrap();
        let rollback_b = history_b.iter().find(|(d, _)| d.name == "current-rollback").unwrap();
        assert_eq!(rollback_b.0.config_yaml, "receivers: {b: {}}");

        assert_ne!(rollback_a.0.id, rollback_b.0.id, "distinct prior configs should produce distinct rollback deployments");
    }
}
