//! AWS CLI destructive operation checks: S3, IAM, RDS, and SES.
//!
//! The SES-specific deletion checks fold in the teacher's `packs/email/ses.rs`
//! pack, which has no separate domain of its own in this catalog.

use super::check;
use crate::catalog::Check;

pub(in crate::catalog) fn register(checks: &mut Vec<Check>) {
    check!(
        checks,
        "aws:s3_rb_force",
        "aws",
        r"\baws\s+s3\s+rb\b.*--force\b",
        Critical,
        "aws s3 rb --force deletes a bucket and all objects in it.",
        hint = Word
    );
    check!(
        checks,
        "aws:s3_rm_recursive",
        "aws",
        r"\baws\s+s3\s+rm\b.*--recursive\b",
        High,
        "aws s3 rm --recursive bulk-deletes every object under the given prefix."
    );
    check!(
        checks,
        "aws:s3api_delete_bucket",
        "aws",
        r"\baws\s+s3api\s+delete-bucket\b",
        High,
        "aws s3api delete-bucket removes an (empty) bucket permanently."
    );
    check!(
        checks,
        "aws:iam_delete_user",
        "aws",
        r"\baws\s+iam\s+delete-user\b",
        Critical,
        "aws iam delete-user removes an IAM user and can break automation depending on it.",
        hint = Word
    );
    check!(
        checks,
        "aws:iam_delete_role",
        "aws",
        r"\baws\s+iam\s+delete-role\b",
        Critical,
        "aws iam delete-role removes an IAM role and breaks anything assuming it.",
        hint = Word
    );
    check!(
        checks,
        "aws:rds_delete_instance_no_snapshot",
        "aws",
        r"\baws\s+rds\s+delete-db-instance\b(?!.*--final-db-snapshot-identifier)",
        Critical,
        "aws rds delete-db-instance without a final snapshot permanently discards the database.",
        hint = Math
    );
    check!(
        checks,
        "aws:ec2_terminate_instances",
        "aws",
        r"\baws\s+ec2\s+terminate-instances\b",
        High,
        "aws ec2 terminate-instances permanently destroys the instance and its instance store."
    );
    check!(
        checks,
        "aws:dynamodb_delete_table",
        "aws",
        r"\baws\s+dynamodb\s+delete-table\b",
        High,
        "aws dynamodb delete-table removes a table and all its items."
    );
    check!(
        checks,
        "aws:ses_delete_identity",
        "aws",
        r"\baws\s+(ses|sesv2)\s+delete-(identity|email-identity)\b",
        Medium,
        "aws ses delete-identity removes a verified email identity."
    );
    check!(
        checks,
        "aws:ses_delete_template",
        "aws",
        r"\baws\s+(ses|sesv2)\s+delete-(template|email-template)\b",
        Medium,
        "aws ses delete-template removes an email template."
    );
    check!(
        checks,
        "aws:ses_delete_configuration_set",
        "aws",
        r"\baws\s+(ses|sesv2)\s+delete-configuration-set\b",
        Medium,
        "aws ses delete-configuration-set removes a configuration set."
    );
    check!(
        checks,
        "aws:sesv2_delete_contact_list",
        "aws",
        r"\baws\s+sesv2\s+delete-contact-list\b",
        Medium,
        "aws sesv2 delete-contact-list removes a contact list."
    );
}
