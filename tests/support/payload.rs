//! Exchange JSON payloads shaped like the live APIs.

pub const NSE_PATH: &str = "/api/corporate-announcements";
pub const BSE_PATH: &str = "/BseIndiaAPI/api/AnnSubCategoryGetData/w";

/// NSE array with a watched row, an unwatched row and malformed rows.
pub const NSE_ANNOUNCEMENTS: &str = r#"[
  {
    "symbol": "INFY",
    "desc": "Outcome of Board Meeting",
    "attchmntText": "Infosys Limited has informed the Exchange regarding Outcome of Board Meeting",
    "attchmntFile": "https://nsearchives.nseindia.com/corporate/INFY_19102026.pdf",
    "sm_name": "Infosys Limited",
    "sm_isin": "INE009A01021",
    "an_dt": "19-Oct-2026 10:15:30",
    "exchdisstime": "19-Oct-2026 10:15:32",
    "smIndustry": "Computers - Software"
  },
  {
    "symbol": "TINYCO",
    "desc": "Updates",
    "attchmntText": "Tiny Co has informed the Exchange about an update",
    "attchmntFile": "-",
    "sm_name": "Tiny Co Limited",
    "sm_isin": "INE000X01010",
    "an_dt": "19-Oct-2026 10:16:00"
  },
  {
    "symbol": "INFY",
    "desc": "Updates",
    "attchmntText": "Row with an unreadable timestamp",
    "an_dt": "sometime today"
  },
  {
    "symbol": "INFY",
    "desc": "Updates",
    "attchmntText": "Row without a timestamp"
  },
  {
    "symbol": null,
    "desc": "Updates",
    "attchmntText": "Row without a symbol",
    "an_dt": "19-Oct-2026 10:17:00"
  }
]"#;

/// BSE envelope with one watched row (numeric scrip code) and one unwatched.
pub const BSE_ANNOUNCEMENTS: &str = r#"{
  "Table": [
    {
      "NEWSID": "6c4b1d7e-9a55-4c2e-bb0c-3c1f1f2f8d11",
      "SCRIP_CD": 500209,
      "NEWSSUB": "Infosys Ltd - 500209 - Board Meeting Outcome",
      "HEADLINE": "Outcome of board meeting",
      "CATEGORYNAME": "Board Meeting",
      "SUBCATNAME": "Outcome of Board Meeting",
      "ATTACHMENTNAME": "6c4b1d7e.pdf",
      "SLONGNAME": "Infosys Ltd",
      "NEWS_DT": "2026-10-19T10:15:40.117",
      "DissemDT": "2026-10-19T10:15:41"
    },
    {
      "NEWSID": "a1",
      "SCRIP_CD": "999999",
      "NEWSSUB": "Tiny Co - 999999 - Update",
      "CATEGORYNAME": "Company Update",
      "SLONGNAME": "Tiny Co",
      "NEWS_DT": "2026-10-19T10:16:10"
    }
  ],
  "Table1": [{ "ROWCNT": 2 }]
}"#;
