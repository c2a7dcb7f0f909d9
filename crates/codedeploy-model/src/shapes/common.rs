// ── Shared structures ──
//
// Tags, tag filters, alarms, rollback settings, and other small records
// reused across deployment groups, deployments, and targets.

use super::enums::{AutoRollbackEvent, ErrorCode, TagFilterType, TriggerEventType};
use crate::scalar::Timestamp;

shape! {
    /// A key/value label attached to a CodeDeploy resource.
    pub struct Tag {
        string key: String => "Key" [length 1..=128],
        string value: String => "Value" [length 0..=256],
    }
}

shape! {
    /// Selects on-premises instances by tag.
    pub struct TagFilter {
        string key: String => "Key",
        string value: String => "Value",
        value filter_type: TagFilterType => "Type",
    }
}

shape! {
    /// Selects EC2 instances by tag.
    pub struct Ec2TagFilter {
        string key: String => "Key",
        string value: String => "Value",
        value filter_type: TagFilterType => "Type",
    }
}

shape! {
    /// Groups of EC2 tag filters. An instance must match at least one
    /// filter in every group.
    pub struct Ec2TagSet {
        list ec2_tag_set_list: Vec<Ec2TagFilter> => "ec2TagSetList" [items ..=3],
    }
}

shape! {
    pub struct OnPremisesTagSet {
        list on_premises_tag_set_list: Vec<TagFilter> => "onPremisesTagSetList" [items ..=3],
    }
}

shape! {
    /// A CloudWatch alarm, by name.
    pub struct Alarm {
        string name: String => "name",
    }
}

shape! {
    pub struct AlarmConfiguration {
        /// Whether alarm monitoring is active.
        copy enabled: bool => "enabled",
        /// Keep deploying when alarm state cannot be read from CloudWatch.
        copy ignore_poll_alarm_failure: bool => "ignorePollAlarmFailure",
        list alarms: Alarm => "alarms" [items ..=10],
    }
}

shape! {
    pub struct AutoRollbackConfiguration {
        copy enabled: bool => "enabled",
        list events: AutoRollbackEvent => "events",
    }
}

shape! {
    /// An Auto Scaling group and the lifecycle hook CodeDeploy installed on it.
    pub struct AutoScalingGroup {
        string name: String => "name",
        string hook: String => "hook",
    }
}

shape! {
    pub struct ErrorInformation {
        value code: ErrorCode => "code",
        string message: String => "message",
    }
}

shape! {
    /// A closed time interval used to filter list results.
    pub struct TimeRange {
        copy start: Timestamp => "start",
        copy end: Timestamp => "end",
    }
}

shape! {
    pub struct TriggerConfig {
        string trigger_name: String => "triggerName",
        /// SNS topic notified when the trigger fires.
        string trigger_target_arn: String => "triggerTargetArn",
        list trigger_events: TriggerEventType => "triggerEvents",
    }
}
