//! Messaging-system destructive operation checks: Kafka, NATS/JetStream,
//! RabbitMQ, AWS SQS/SNS.

use super::check;
use crate::catalog::Check;

pub(in crate::catalog) fn register(checks: &mut Vec<Check>) {
    check!(
        checks,
        "messaging:kafka_topic_delete",
        "messaging",
        r"\bkafka-topics(?:\.sh)?\b.*\s--delete\b",
        High,
        "kafka-topics --delete removes Kafka topics and data."
    );
    check!(
        checks,
        "messaging:kafka_consumer_group_delete",
        "messaging",
        r"\bkafka-consumer-groups(?:\.sh)?\b.*\s--delete\b",
        Medium,
        "kafka-consumer-groups --delete removes consumer groups and offsets."
    );
    check!(
        checks,
        "messaging:kafka_reset_offsets",
        "messaging",
        r"\bkafka-consumer-groups(?:\.sh)?\b.*\s--reset-offsets\b",
        Medium,
        "kafka-consumer-groups --reset-offsets rewinds offsets and can cause reprocessing."
    );
    check!(
        checks,
        "messaging:kafka_delete_records",
        "messaging",
        r"\bkafka-delete-records(?:\.sh)?\b",
        High,
        "kafka-delete-records deletes records up to specified offsets."
    );
    check!(
        checks,
        "messaging:nats_stream_delete",
        "messaging",
        r"\bnats(?:\s+--?\S+(?:\s+\S+)?)*\s+stream\s+(delete|rm|purge)\b",
        High,
        "nats stream delete/rm/purge removes a JetStream stream or all its messages."
    );
    check!(
        checks,
        "messaging:nats_kv_delete",
        "messaging",
        r"\bnats(?:\s+--?\S+(?:\s+\S+)?)*\s+kv\s+(del|rm)\b",
        Medium,
        "nats kv del/rm deletes key-value entries."
    );
    check!(
        checks,
        "messaging:rabbitmq_delete_queue",
        "messaging",
        r"\brabbitmqadmin(?:\s+--?\S+(?:\s+\S+)?)*\s+(delete\s+queue|purge\s+queue)\b",
        High,
        "rabbitmqadmin delete/purge queue permanently removes a queue or its messages."
    );
    check!(
        checks,
        "messaging:rabbitmqctl_reset",
        "messaging",
        r"\brabbitmqctl(?:\s+--?\S+(?:\s+\S+)?)*\s+(force_)?reset\b",
        Critical,
        "rabbitmqctl reset wipes all configuration, queues, and bindings on the node.",
        hint = Word
    );
    check!(
        checks,
        "messaging:sqs_delete_queue",
        "messaging",
        r"\baws(?:\s+--?\S+(?:\s+\S+)?)*\s+sqs\s+(delete-queue|purge-queue)\b",
        High,
        "aws sqs delete-queue/purge-queue permanently removes a queue or its messages."
    );
    check!(
        checks,
        "messaging:sns_delete_topic",
        "messaging",
        r"\baws(?:\s+--?\S+(?:\s+\S+)?)*\s+sns\s+delete-topic\b",
        High,
        "aws sns delete-topic removes an SNS topic and its subscriptions."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_checks() -> Vec<Check> {
        let mut v = Vec::new();
        register(&mut v);
        v
    }

    #[test]
    fn kafka_topic_delete_matches() {
        let checks = catalog_checks();
        let hit = checks
            .iter()
            .find(|c| c.id == "messaging:kafka_topic_delete")
            .unwrap();
        assert!(hit.is_match(
            "kafka-topics --bootstrap-server localhost:9092 --delete --topic orders"
        ));
    }

    #[test]
    fn rabbitmqctl_reset_variants() {
        let checks = catalog_checks();
        let hit = checks
            .iter()
            .find(|c| c.id == "messaging:rabbitmqctl_reset")
            .unwrap();
        assert!(hit.is_match("rabbitmqctl reset"));
        assert!(hit.is_match("rabbitmqctl force_reset"));
    }

    #[test]
    fn nats_stream_operations_matched() {
        let checks = catalog_checks();
        let hit = checks
            .iter()
            .find(|c| c.id == "messaging:nats_stream_delete")
            .unwrap();
        assert!(hit.is_match("nats stream delete ORDERS"));
        assert!(hit.is_match("nats stream purge ORDERS"));
        assert!(!hit.is_match("nats stream info ORDERS"));
    }
}
