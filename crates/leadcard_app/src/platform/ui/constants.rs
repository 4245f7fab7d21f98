/// Lead sheet used when no `--csv` is given.
pub const SAMPLE_LEADS_CSV: &str = include_str!("../../../assets/sample_leads.csv");

pub const RULE_WIDTH: usize = 60;

pub const HELP_TEXT: &str = "\
Commands:
  n, next            next lead
  p, prev            previous lead
  first, last        jump to the first or last lead
  j <n>, <n>         jump to lead number n
  f <industry>       show only one industry
  f                  clear the industry filter
  ], [               cycle through industries
  d, dismiss         hide the parse-error notice
  h, help            show this help
  q, quit            exit";
