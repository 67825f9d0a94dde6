use crate::schema::{load_schema, parse_tab_metadata, RawTabMetadata, SchemaModel};

// The adapter selector carries no default: an adapter must be chosen before
// any platform-specific stage becomes visible.
pub const ADAPTER_TAB_METADATA: &str = r#"
name: adapter
label:
  en_US: Messaging Adapter
  zh_Hans: 消息平台
stages:
  - name: adapter
    label:
      en_US: Adapter
      zh_Hans: 适配器
    description:
      en_US: The messaging platform this bot instance binds to
      zh_Hans: 机器人实例绑定的消息平台
    config:
      - name: adapter
        label:
          en_US: Adapter
          zh_Hans: 适配器
        type: select
        required: true
        options:
          - label:
              en_US: OneBot (aiocqhttp)
              zh_Hans: OneBot 协议（aiocqhttp）
            value: aiocqhttp
          - label:
              en_US: Telegram
              zh_Hans: Telegram
            value: telegram
          - label:
              en_US: Discord
              zh_Hans: Discord
            value: discord
  - name: aiocqhttp
    label:
      en_US: OneBot Connection
      zh_Hans: OneBot 连接
    visible_when:
      field: adapter.adapter
      operator: equals
      value: aiocqhttp
    config:
      - name: host
        label:
          en_US: Listen Host
          zh_Hans: 监听地址
        type: string
        required: true
        default: "0.0.0.0"
      - name: port
        label:
          en_US: Listen Port
          zh_Hans: 监听端口
        type: number
        required: true
        default: 2280
      - name: access-token
        label:
          en_US: Access Token
          zh_Hans: 访问令牌
        type: string
  - name: telegram
    label:
      en_US: Telegram Bot
      zh_Hans: Telegram 机器人
    visible_when:
      field: adapter.adapter
      operator: equals
      value: telegram
    config:
      - name: token
        label:
          en_US: Bot Token
          zh_Hans: 机器人令牌
        type: string
        required: true
  - name: discord
    label:
      en_US: Discord Bot
      zh_Hans: Discord 机器人
    visible_when:
      field: adapter.adapter
      operator: equals
      value: discord
    config:
      - name: client-id
        label:
          en_US: Client ID
          zh_Hans: 客户端 ID
        type: string
        required: true
      - name: token
        label:
          en_US: Bot Token
          zh_Hans: 机器人令牌
        type: string
        required: true
"#;

pub fn bot_tab_metadata() -> Vec<RawTabMetadata> {
    vec![parse_tab_metadata(ADAPTER_TAB_METADATA).expect("builtin bot metadata is valid")]
}

pub fn bot_schema() -> SchemaModel {
    load_schema(&bot_tab_metadata()).expect("builtin bot metadata satisfies schema invariants")
}
