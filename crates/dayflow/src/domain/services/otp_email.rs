//! OTP Email Template
//!
//! Verification email carrying a one-time passcode, in HTML and plain text.

use crate::domain::entities::OutgoingEmail;
use crate::domain::value_objects::OtpCode;

/// Product name shown in the subject, body and signature
pub const BRAND_NAME: &str = "DayFlow HRMS";

/// How long an issued passcode stays valid
pub const OTP_VALIDITY_MINUTES: i64 = 10;

pub const OTP_SUBJECT: &str = "Verify Your Email - DayFlow HRMS";

/// Render the verification email for `name` addressed to `to`
pub fn render_otp_email(to: &str, name: &str, otp: &OtpCode) -> OutgoingEmail {
    OutgoingEmail {
        to: to.to_string(),
        subject: OTP_SUBJECT.to_string(),
        html: otp_html(&escape_html(name), otp.as_str()),
        text: otp_text(name, otp.as_str()),
    }
}

fn otp_html(name: &str, otp: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 30px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0; font-size: 28px;">Email Verification</h1>
  </div>
  <div style="background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <p style="font-size: 16px; margin-bottom: 20px;">Hi <strong>{name}</strong>,</p>
    <p style="font-size: 16px; margin-bottom: 20px;">
      Thank you for registering with {brand}. Please use the following verification code to verify your email address:
    </p>
    <div style="background: white; padding: 30px; text-align: center; margin: 30px 0; border-radius: 8px; border: 2px solid #667eea;">
      <div style="font-size: 36px; font-weight: bold; color: #667eea; letter-spacing: 8px; font-family: 'Courier New', monospace;">{otp}</div>
    </div>
    <p style="font-size: 14px; color: #666; margin-bottom: 10px;">
      <strong>Important:</strong> This code will expire in <strong>{minutes} minutes</strong>.
    </p>
    <p style="font-size: 14px; color: #666; margin-bottom: 20px;">
      If you didn't create an account, please ignore this email.
    </p>
    <div style="border-top: 1px solid #ddd; padding-top: 20px; margin-top: 30px;">
      <p style="font-size: 12px; color: #999; margin: 0;">
        Best regards,<br>
        <strong>{brand} Team</strong>
      </p>
    </div>
  </div>
</body>
</html>"#,
        name = name,
        otp = otp,
        brand = BRAND_NAME,
        minutes = OTP_VALIDITY_MINUTES,
    )
}

fn otp_text(name: &str, otp: &str) -> String {
    format!(
        "Email Verification - {brand}\n\
         \n\
         Hi {name},\n\
         \n\
         Thank you for registering with {brand}. Please use the following verification code to verify your email address:\n\
         \n\
         Verification Code: {otp}\n\
         \n\
         This code will expire in {minutes} minutes.\n\
         \n\
         If you didn't create an account, please ignore this email.\n\
         \n\
         Best regards,\n\
         {brand} Team",
        brand = BRAND_NAME,
        minutes = OTP_VALIDITY_MINUTES,
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
