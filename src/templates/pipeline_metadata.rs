use crate::schema::{load_schema, parse_tab_metadata, RawTabMetadata, SchemaModel};

pub const AI_TAB_METADATA: &str = r#"
name: ai
label:
  en_US: AI Capability
  zh_Hans: AI能力
stages:
  - name: runner
    label:
      en_US: Runner
      zh_Hans: 运行器
    description:
      en_US: Which runner handles incoming conversations
      zh_Hans: 选择处理对话的运行器
    config:
      - name: runner
        label:
          en_US: Runner
          zh_Hans: 运行器
        type: select
        required: true
        default: local-agent
        options:
          - label:
              en_US: Built-in Agent
              zh_Hans: 内置 Agent
            value: local-agent
          - label:
              en_US: Dify Service API
              zh_Hans: Dify 服务 API
            value: dify-service-api
          - label:
              en_US: Aliyun Bailian App API
              zh_Hans: 阿里云百炼平台 API
            value: dashscope-app-api
  - name: local-agent
    label:
      en_US: Built-in Agent
      zh_Hans: 内置 Agent
    visible_when:
      field: runner.runner
      operator: equals
      value: local-agent
    config:
      - name: model
        label:
          en_US: Model
          zh_Hans: 模型
        type: string
        required: true
      - name: max-round
        label:
          en_US: Max Rounds
          zh_Hans: 最大回合数
        type: number
        required: true
        default: 10
      - name: prompt
        label:
          en_US: Prompt
          zh_Hans: 提示词
        type: object
        required: true
        default:
          role: system
          content: You are a helpful assistant.
  - name: dify-service-api
    label:
      en_US: Dify Service API
      zh_Hans: Dify 服务 API
    visible_when:
      field: runner.runner
      operator: equals
      value: dify-service-api
    config:
      - name: base-url
        label:
          en_US: Base URL
          zh_Hans: 基础 URL
        type: string
        required: true
      - name: app-type
        label:
          en_US: App Type
          zh_Hans: 应用类型
        type: select
        required: true
        default: chat
        options:
          - label:
              en_US: Chat (including Chatflow)
              zh_Hans: 聊天（包括Chatflow）
            value: chat
          - label:
              en_US: Agent
              zh_Hans: Agent
            value: agent
          - label:
              en_US: Workflow
              zh_Hans: 工作流
            value: workflow
      - name: api-key
        label:
          en_US: API Key
          zh_Hans: API 密钥
        type: string
        required: true
      - name: thinking-convert
        label:
          en_US: Chain-of-thought Handling
          zh_Hans: 思维链转换
        type: select
        required: true
        default: plain
        options:
          - label:
              en_US: Convert to think blocks
              zh_Hans: 转换成 think 标签
            value: plain
          - label:
              en_US: Keep original
              zh_Hans: 原始
            value: original
          - label:
              en_US: Remove
              zh_Hans: 移除
            value: remove
  - name: dashscope-app-api
    label:
      en_US: Aliyun Bailian App API
      zh_Hans: 阿里云百炼平台 API
    visible_when:
      field: runner.runner
      operator: equals
      value: dashscope-app-api
    config:
      - name: app-type
        label:
          en_US: App Type
          zh_Hans: 应用类型
        type: select
        required: true
        default: agent
        options:
          - label:
              en_US: Agent
              zh_Hans: Agent
            value: agent
          - label:
              en_US: Workflow
              zh_Hans: 工作流
            value: workflow
      - name: api-key
        label:
          en_US: API Key
          zh_Hans: API 密钥
        type: string
        required: true
      - name: app-id
        label:
          en_US: App ID
          zh_Hans: 应用 ID
        type: string
        required: true
      - name: references_quote
        label:
          en_US: References Quote
          zh_Hans: 引用文本
        type: string
        default: "参考资料来自:"
"#;

pub const TRIGGER_TAB_METADATA: &str = r#"
name: trigger
label:
  en_US: Trigger Conditions
  zh_Hans: 触发条件
stages:
  - name: group-respond-rules
    label:
      en_US: Group Response Rules
      zh_Hans: 群响应规则
    description:
      en_US: When the bot responds inside group chats
      zh_Hans: 机器人在群聊中的响应时机
    config:
      - name: at
        label:
          en_US: Respond when mentioned
          zh_Hans: 是否在消息@机器人时触发
        type: boolean
        required: true
        default: true
      - name: prefix
        label:
          en_US: Message Prefixes
          zh_Hans: 消息前缀
        type: tags
        default: []
      - name: regexp
        label:
          en_US: Regular Expressions
          zh_Hans: 正则表达式
        type: tags
        default: []
      - name: random
        label:
          en_US: Random Response Probability
          zh_Hans: 随机
        type: number
        default: 0.0
  - name: access-control
    label:
      en_US: Access Control
      zh_Hans: 访问控制
    config:
      - name: mode
        label:
          en_US: Mode
          zh_Hans: 模式
        type: select
        required: true
        default: blacklist
        options:
          - label:
              en_US: Blacklist
              zh_Hans: 黑名单
            value: blacklist
          - label:
              en_US: Whitelist
              zh_Hans: 白名单
            value: whitelist
      - name: blacklist
        label:
          en_US: Blacklist
          zh_Hans: 黑名单
        type: tags
        default: []
        visible_when:
          field: access-control.mode
          operator: equals
          value: blacklist
      - name: whitelist
        label:
          en_US: Whitelist
          zh_Hans: 白名单
        type: tags
        default: []
        visible_when:
          field: access-control.mode
          operator: equals
          value: whitelist
  - name: ignore-rules
    label:
      en_US: Message Ignore Rules
      zh_Hans: 消息忽略规则
    config:
      - name: prefix
        label:
          en_US: Prefixes
          zh_Hans: 前缀
        type: tags
        default: []
      - name: regexp
        label:
          en_US: Regular Expressions
          zh_Hans: 正则表达式
        type: tags
        default: []
"#;

pub const SAFETY_TAB_METADATA: &str = r#"
name: safety
label:
  en_US: Safety
  zh_Hans: 安全能力
stages:
  - name: content-filter
    label:
      en_US: Content Filter
      zh_Hans: 内容过滤
    config:
      - name: scope
        label:
          en_US: Check Scope
          zh_Hans: 检查范围
        type: select
        required: true
        default: all
        options:
          - label:
              en_US: All messages
              zh_Hans: 全部
            value: all
          - label:
              en_US: Incoming messages
              zh_Hans: 传入消息（用户消息）
            value: income-msg
          - label:
              en_US: Outgoing messages
              zh_Hans: 传出消息（机器人消息）
            value: output-msg
      - name: check-sensitive-words
        label:
          en_US: Check Sensitive Words
          zh_Hans: 检查敏感词
        type: boolean
        required: true
        default: true
  - name: rate-limit
    label:
      en_US: Rate Limit
      zh_Hans: 速率限制
    config:
      - name: window-length
        label:
          en_US: Window Length (seconds)
          zh_Hans: 窗口长度（秒）
        type: number
        required: true
        default: 60
      - name: limitation
        label:
          en_US: Max Requests per Window
          zh_Hans: 限制次数
        type: number
        required: true
        default: 60
      - name: strategy
        label:
          en_US: Strategy
          zh_Hans: 策略
        type: select
        required: true
        default: drop
        options:
          - label:
              en_US: Drop
              zh_Hans: 丢弃
            value: drop
          - label:
              en_US: Wait
              zh_Hans: 等待
            value: wait
"#;

pub const OUTPUT_TAB_METADATA: &str = r#"
name: output
label:
  en_US: Output Processing
  zh_Hans: 输出处理
stages:
  - name: long-text-processing
    label:
      en_US: Long Text Handling
      zh_Hans: 长文本处理
    config:
      - name: threshold
        label:
          en_US: Threshold
          zh_Hans: 阈值
        type: number
        required: true
        default: 256
      - name: strategy
        label:
          en_US: Strategy
          zh_Hans: 策略
        type: select
        required: true
        default: forward
        options:
          - label:
              en_US: Forward component
              zh_Hans: 转发消息组件
            value: forward
          - label:
              en_US: Convert to image
              zh_Hans: 转换为图片
            value: image
      - name: font-path
        label:
          en_US: Font Path
          zh_Hans: 字体路径
        type: string
        required: true
        visible_when:
          field: long-text-processing.strategy
          operator: equals
          value: image
  - name: force-delay
    label:
      en_US: Forced Delay
      zh_Hans: 强制延迟
    config:
      - name: min
        label:
          en_US: Min Seconds
          zh_Hans: 最小秒数
        type: number
        required: true
        default: 0
      - name: max
        label:
          en_US: Max Seconds
          zh_Hans: 最大秒数
        type: number
        required: true
        default: 10
  - name: misc
    label:
      en_US: Misc
      zh_Hans: 杂项
    config:
      - name: hide-exception
        label:
          en_US: Hide exception details from users
          zh_Hans: 不输出异常信息给用户
        type: boolean
        required: true
        default: true
      - name: at-sender
        label:
          en_US: Mention sender in replies
          zh_Hans: 在回复中@发送者
        type: boolean
        required: true
        default: false
      - name: quote-origin
        label:
          en_US: Quote the original message
          zh_Hans: 引用原文
        type: boolean
        required: true
        default: false
      - name: track-function-calls
        label:
          en_US: Track function calls
          zh_Hans: 跟踪函数调用
        type: boolean
        required: true
        default: false
"#;

pub fn pipeline_tab_metadata() -> Vec<RawTabMetadata> {
    [
        AI_TAB_METADATA,
        TRIGGER_TAB_METADATA,
        SAFETY_TAB_METADATA,
        OUTPUT_TAB_METADATA,
    ]
    .iter()
    .map(|raw| parse_tab_metadata(raw).expect("builtin pipeline metadata is valid"))
    .collect()
}

pub fn pipeline_schema() -> SchemaModel {
    load_schema(&pipeline_tab_metadata())
        .expect("builtin pipeline metadata satisfies schema invariants")
}
