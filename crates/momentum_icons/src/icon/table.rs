//! Rows exported from the Momentum UI rebrand icon font.
//!
//! One row per glyph, in export order. Ligatures are assigned sequentially from
//! `U+F101`; filenames are the asset basenames exactly as the export names them.
//! Regenerate from the font manifest rather than editing rows by hand.

icon_table! {
    AccessibilityBold => "accessibilityBold", "\u{f101}", "accessibility-bold";
    AccessibilityLight => "accessibilityLight", "\u{f102}", "accessibility-light";
    AccessibilityRegular => "accessibilityRegular", "\u{f103}", "accessibility-regular";
    AccessoriesBold => "accessoriesBold", "\u{f104}", "accessories-bold";
    AccessoriesFilled => "accessoriesFilled", "\u{f105}", "accessories-filled";
    AccessoriesLight => "accessoriesLight", "\u{f106}", "accessories-light";
    AccessoriesRegular => "accessoriesRegular", "\u{f107}", "accessories-regular";
    ActiveSpeakerAlertBold => "activeSpeakerAlertBold", "\u{f108}", "active-speaker-alert-bold";
    ActiveSpeakerAlertLight => "activeSpeakerAlertLight", "\u{f109}", "active-speaker-alert-light";
    ActiveSpeakerAlertRegular => "activeSpeakerAlertRegular", "\u{f10a}", "active-speaker-alert-regular";
    ActiveSpeakerBold => "activeSpeakerBold", "\u{f10b}", "active-speaker-bold";
    ActiveSpeakerLight => "activeSpeakerLight", "\u{f10c}", "active-speaker-light";
    ActiveSpeakerLockBold => "activeSpeakerLockBold", "\u{f10d}", "active-speaker-lock-bold";
    ActiveSpeakerLockLight => "activeSpeakerLockLight", "\u{f10e}", "active-speaker-lock-light";
    ActiveSpeakerLockRegular => "activeSpeakerLockRegular", "\u{f10f}", "active-speaker-lock-regular";
    ActiveSpeakerRegular => "activeSpeakerRegular", "\u{f110}", "active-speaker-regular";
    AddOptionBold => "addOptionBold", "\u{f111}", "add-option-bold";
    AddOptionLight => "addOptionLight", "\u{f112}", "add-option-light";
    AddOptionRegular => "addOptionRegular", "\u{f113}", "add-option-regular";
    AddPollBold => "addPollBold", "\u{f114}", "add-poll-bold";
    AddPollLight => "addPollLight", "\u{f115}", "add-poll-light";
    AddPollRegular => "addPollRegular", "\u{f116}", "add-poll-regular";
    AddQuestionBold => "addQuestionBold", "\u{f117}", "add-question-bold";
    AddQuestionLight => "addQuestionLight", "\u{f118}", "add-question-light";
    AddQuestionRegular => "addQuestionRegular", "\u{f119}", "add-question-regular";
    AddVideoMarkerBold => "addVideoMarkerBold", "\u{f11a}", "add-video-marker-bold";
    AddVideoMarkerLight => "addVideoMarkerLight", "\u{f11b}", "add-video-marker-light";
    AddVideoMarkerRegular => "addVideoMarkerRegular", "\u{f11c}", "add-video-marker-regular";
    AdjustAudioBold => "adjustAudioBold", "\u{f11d}", "adjust-audio-bold";
    AdjustAudioLight => "adjustAudioLight", "\u{f11e}", "adjust-audio-light";
    AdjustAudioRegular => "adjustAudioRegular", "\u{f11f}", "adjust-audio-regular";
    AdjustBold => "adjustBold", "\u{f120}", "adjust-bold";
    AdjustLight => "adjustLight", "\u{f121}", "adjust-light";
    AdjustMicrophoneBold => "adjustMicrophoneBold", "\u{f122}", "adjust-microphone-bold";
    AdjustMicrophoneLight => "adjustMicrophoneLight", "\u{f123}", "adjust-microphone-light";
    AdjustMicrophoneRegular => "adjustMicrophoneRegular", "\u{f124}", "adjust-microphone-regular";
    AdjustRegular => "adjustRegular", "\u{f125}", "adjust-regular";
    AdjustVideoBold => "adjustVideoBold", "\u{f126}", "adjust-video-bold";
    AdjustVideoLight => "adjustVideoLight", "\u{f127}", "adjust-video-light";
    AdjustVideoRegular => "adjustVideoRegular", "\u{f128}", "adjust-video-regular";
    AdminBold => "adminBold", "\u{f129}", "admin-bold";
    AdminLight => "adminLight", "\u{f12a}", "admin-light";
    AdminRegular => "adminRegular", "\u{f12b}", "admin-regular";
    AdvancedNoiseRemovalBold => "advancedNoiseRemovalBold", "\u{f12c}", "advanced-noise-removal-bold";
    AdvancedNoiseRemovalLight => "advancedNoiseRemovalLight", "\u{f12d}", "advanced-noise-removal-light";
    AdvancedNoiseRemovalRegular => "advancedNoiseRemovalRegular", "\u{f12e}", "advanced-noise-removal-regular";
    AlarmBold => "alarmBold", "\u{f12f}", "alarm-bold";
    AlarmFilled => "alarmFilled", "\u{f130}", "alarm-filled";
    AlarmLight => "alarmLight", "\u{f131}", "alarm-light";
    AlarmRegular => "alarmRegular", "\u{f132}", "alarm-regular";
    AlertActiveBold => "alertActiveBold", "\u{f133}", "alert-active-bold";
    AlertActiveFilled => "alertActiveFilled", "\u{f134}", "alert-active-filled";
    AlertActiveLight => "alertActiveLight", "\u{f135}", "alert-active-light";
    AlertActiveRegular => "alertActiveRegular", "\u{f136}", "alert-active-regular";
    AlertBold => "alertBold", "\u{f137}", "alert-bold";
    AlertFilled => "alertFilled", "\u{f138}", "alert-filled";
    AlertLight => "alertLight", "\u{f139}", "alert-light";
    AlertMutedBold => "alertMutedBold", "\u{f13a}", "alert-muted-bold";
    AlertMutedFilled => "alertMutedFilled", "\u{f13b}", "alert-muted-filled";
    AlertMutedLight => "alertMutedLight", "\u{f13c}", "alert-muted-light";
    AlertMutedRegular => "alertMutedRegular", "\u{f13d}", "alert-muted-regular";
    AlertRegular => "alertRegular", "\u{f13e}", "alert-regular";
    AlignLeftBold => "alignLeftBold", "\u{f13f}", "align-left-bold";
    AlignLeftLight => "alignLeftLight", "\u{f140}", "align-left-light";
    AlignLeftRegular => "alignLeftRegular", "\u{f141}", "align-left-regular";
    AlignRightBold => "alignRightBold", "\u{f142}", "align-right-bold";
    AlignRightLight => "alignRightLight", "\u{f143}", "align-right-light";
    AlignRightRegular => "alignRightRegular", "\u{f144}", "align-right-regular";
    AllowToAnnotateBold => "allowToAnnotateBold", "\u{f145}", "allow-to-annotate-bold";
    AllowToAnnotateLight => "allowToAnnotateLight", "\u{f146}", "allow-to-annotate-light";
    AllowToAnnotateRegular => "allowToAnnotateRegular", "\u{f147}", "allow-to-annotate-regular";
    AnalysisBold => "analysisBold", "\u{f148}", "analysis-bold";
    AnalysisFilled => "analysisFilled", "\u{f149}", "analysis-filled";
    AnalysisLight => "analysisLight", "\u{f14a}", "analysis-light";
    AnalysisRegular => "analysisRegular", "\u{f14b}", "analysis-regular";
    AnnotateBold => "annotateBold", "\u{f14c}", "annotate-bold";
    AnnotateFilled => "annotateFilled", "\u{f14d}", "annotate-filled";
    AnnotateLight => "annotateLight", "\u{f14e}", "annotate-light";
    AnnotateRegular => "annotateRegular", "\u{f14f}", "annotate-regular";
    AnnouncementBold => "announcementBold", "\u{f150}", "announcement-bold";
    AnnouncementFilled => "announcementFilled", "\u{f151}", "announcement-filled";
    AnnouncementLight => "announcementLight", "\u{f152}", "announcement-light";
    AnnouncementMutedBold => "announcementMutedBold", "\u{f153}", "announcement-muted-bold";
    AnnouncementMutedFilled => "announcementMutedFilled", "\u{f154}", "announcement-muted-filled";
    AnnouncementMutedLight => "announcementMutedLight", "\u{f155}", "announcement-muted-light";
    AnnouncementMutedRegular => "announcementMutedRegular", "\u{f156}", "announcement-muted-regular";
    AnnouncementRegular => "announcementRegular", "\u{f157}", "announcement-regular";
    AppearanceBold => "appearanceBold", "\u{f158}", "appearance-bold";
    AppearanceLight => "appearanceLight", "\u{f159}", "appearance-light";
    AppearanceRegular => "appearanceRegular", "\u{f15a}", "appearance-regular";
    ApplauseBold => "applauseBold", "\u{f15b}", "applause-bold";
    ApplauseLight => "applauseLight", "\u{f15c}", "applause-light";
    ApplauseRegular => "applauseRegular", "\u{f15d}", "applause-regular";
    ApplicationBold => "applicationBold", "\u{f15e}", "application-bold";
    ApplicationLight => "applicationLight", "\u{f15f}", "application-light";
    ApplicationPanelBold => "applicationPanelBold", "\u{f160}", "application-panel-bold";
    ApplicationPanelLight => "applicationPanelLight", "\u{f161}", "application-panel-light";
    ApplicationPanelRegular => "applicationPanelRegular", "\u{f162}", "application-panel-regular";
    ApplicationRegular => "applicationRegular", "\u{f163}", "application-regular";
    ApplicationsBold => "applicationsBold", "\u{f164}", "applications-bold";
    ApplicationsLight => "applicationsLight", "\u{f165}", "applications-light";
    ApplicationsRegular => "applicationsRegular", "\u{f166}", "applications-regular";
    ApprovalsBold => "approvalsBold", "\u{f167}", "approvals-bold";
    ApprovalsLight => "approvalsLight", "\u{f168}", "approvals-light";
    ApprovalsRegular => "approvalsRegular", "\u{f169}", "approvals-regular";
    AppsBold => "appsBold", "\u{f16a}", "apps-bold";
    AppsFilled => "appsFilled", "\u{f16b}", "apps-filled";
    AppsLight => "appsLight", "\u{f16c}", "apps-light";
    AppsRegular => "appsRegular", "\u{f16d}", "apps-regular";
    ArchiveBold => "archiveBold", "\u{f16e}", "archive-bold";
    ArchiveLight => "archiveLight", "\u{f16f}", "archive-light";
    ArchiveRegular => "archiveRegular", "\u{f170}", "archive-regular";
    AreaChartBold => "areaChartBold", "\u{f171}", "area-chart-bold";
    AreaChartFilled => "areaChartFilled", "\u{f172}", "area-chart-filled";
    AreaChartLight => "areaChartLight", "\u{f173}", "area-chart-light";
    AreaChartRegular => "areaChartRegular", "\u{f174}", "area-chart-regular";
    AreaSelectorBold => "areaSelectorBold", "\u{f175}", "area-selector-bold";
    AreaSelectorLight => "areaSelectorLight", "\u{f176}", "area-selector-light";
    AreaSelectorRegular => "areaSelectorRegular", "\u{f177}", "area-selector-regular";
    ArrowCircleDownBold => "arrowCircleDownBold", "\u{f178}", "arrow-circle-down-bold";
    ArrowCircleDownFilled => "arrowCircleDownFilled", "\u{f179}", "arrow-circle-down-filled";
    ArrowCircleDownLight => "arrowCircleDownLight", "\u{f17a}", "arrow-circle-down-light";
    ArrowCircleDownRegular => "arrowCircleDownRegular", "\u{f17b}", "arrow-circle-down-regular";
    ArrowCircleLeftBold => "arrowCircleLeftBold", "\u{f17c}", "arrow-circle-left-bold";
    ArrowCircleLeftFilled => "arrowCircleLeftFilled", "\u{f17d}", "arrow-circle-left-filled";
    ArrowCircleLeftLight => "arrowCircleLeftLight", "\u{f17e}", "arrow-circle-left-light";
    ArrowCircleLeftRegular => "arrowCircleLeftRegular", "\u{f17f}", "arrow-circle-left-regular";
    ArrowCircleRightBold => "arrowCircleRightBold", "\u{f180}", "arrow-circle-right-bold";
    ArrowCircleRightFilled => "arrowCircleRightFilled", "\u{f181}", "arrow-circle-right-filled";
    ArrowCircleRightLight => "arrowCircleRightLight", "\u{f182}", "arrow-circle-right-light";
    ArrowCircleRightRegular => "arrowCircleRightRegular", "\u{f183}", "arrow-circle-right-regular";
    ArrowCircleUpBold => "arrowCircleUpBold", "\u{f184}", "arrow-circle-up-bold";
    ArrowCircleUpFilled => "arrowCircleUpFilled", "\u{f185}", "arrow-circle-up-filled";
    ArrowCircleUpLight => "arrowCircleUpLight", "\u{f186}", "arrow-circle-up-light";
    ArrowCircleUpRegular => "arrowCircleUpRegular", "\u{f187}", "arrow-circle-up-regular";
    ArrowDownBold => "arrowDownBold", "\u{f188}", "arrow-down-bold";
    ArrowDownFilled => "arrowDownFilled", "\u{f189}", "arrow-down-filled";
    ArrowDownLight => "arrowDownLight", "\u{f18a}", "arrow-down-light";
    ArrowDownOpticalRegular => "arrowDownOpticalRegular", "\u{f18b}", "arrow-down-optical-regular";
    ArrowLeftBold => "arrowLeftBold", "\u{f18c}", "arrow-left-bold";
    ArrowLeftFilled => "arrowLeftFilled", "\u{f18d}", "arrow-left-filled";
    ArrowLeftLight => "arrowLeftLight", "\u{f18e}", "arrow-left-light";
    ArrowLeftRegular => "arrowLeftRegular", "\u{f18f}", "arrow-left-regular";
    ArrowRightBold => "arrowRightBold", "\u{f190}", "arrow-right-bold";
    ArrowRightFilled => "arrowRightFilled", "\u{f191}", "arrow-right-filled";
    ArrowRightLight => "arrowRightLight", "\u{f192}", "arrow-right-light";
    ArrowRightRegular => "arrowRightRegular", "\u{f193}", "arrow-right-regular";
    ArrowTailDownBold => "arrowTailDownBold", "\u{f194}", "arrow-tail-down-bold";
    ArrowTailDownLight => "arrowTailDownLight", "\u{f195}", "arrow-tail-down-light";
    ArrowTailDownRegular => "arrowTailDownRegular", "\u{f196}", "arrow-tail-down-regular";
    ArrowTailUpBold => "arrowTailUpBold", "\u{f197}", "arrow-tail-up-bold";
    ArrowTailUpLight => "arrowTailUpLight", "\u{f198}", "arrow-tail-up-light";
    ArrowTailUpRegular => "arrowTailUpRegular", "\u{f199}", "arrow-tail-up-regular";
    ArrowUpBold => "arrowUpBold", "\u{f19a}", "arrow-up-bold";
    ArrowUpFilled => "arrowUpFilled", "\u{f19b}", "arrow-up-filled";
    ArrowUpLight => "arrowUpLight", "\u{f19c}", "arrow-up-light";
    ArrowUpRegular => "arrowUpRegular", "\u{f19d}", "arrow-up-regular";
    AskForHelpBold => "askForHelpBold", "\u{f19e}", "ask-for-help-bold";
    AskForHelpFilled => "askForHelpFilled", "\u{f19f}", "ask-for-help-filled";
    AskForHelpLight => "askForHelpLight", "\u{f1a0}", "ask-for-help-light";
    AskForHelpRegular => "askForHelpRegular", "\u{f1a1}", "ask-for-help-regular";
    AssignHostBold => "assignHostBold", "\u{f1a2}", "assign-host-bold";
    AssignHostLight => "assignHostLight", "\u{f1a3}", "assign-host-light";
    AssignHostRegular => "assignHostRegular", "\u{f1a4}", "assign-host-regular";
    AssignPrivilegeBold => "assignPrivilegeBold", "\u{f1a5}", "assign-privilege-bold";
    AssignPrivilegeLight => "assignPrivilegeLight", "\u{f1a6}", "assign-privilege-light";
    AssignPrivilegeRegular => "assignPrivilegeRegular", "\u{f1a7}", "assign-privilege-regular";
    AttachmentBold => "attachmentBold", "\u{f1a8}", "attachment-bold";
    AttachmentLight => "attachmentLight", "\u{f1a9}", "attachment-light";
    AttachmentRegular => "attachmentRegular", "\u{f1aa}", "attachment-regular";
    AudioBroadcastBold => "audioBroadcastBold", "\u{f1ab}", "audio-broadcast-bold";
    AudioBroadcastLight => "audioBroadcastLight", "\u{f1ac}", "audio-broadcast-light";
    AudioBroadcastRegular => "audioBroadcastRegular", "\u{f1ad}", "audio-broadcast-regular";
    AudioCallBold => "audioCallBold", "\u{f1ae}", "audio-call-bold";
    AudioCallFilled => "audioCallFilled", "\u{f1af}", "audio-call-filled";
    AudioCallLight => "audioCallLight", "\u{f1b0}", "audio-call-light";
    AudioCallRegular => "audioCallRegular", "\u{f1b1}", "audio-call-regular";
    AudioMicrophoneOnBold => "audioMicrophoneOnBold", "\u{f1b2}", "audio-microphone-on-bold";
    AudioMicrophoneOnColoredBold => "audioMicrophoneOnColoredBold", "\u{f1b3}", "audio-microphone-on-colored-bold";
    AudioMicrophoneOnColoredLight => "audioMicrophoneOnColoredLight", "\u{f1b4}", "audio-microphone-on-colored-light";
    AudioMicrophoneOnColoredRegular => "audioMicrophoneOnColoredRegular", "\u{f1b5}", "audio-microphone-on-colored-regular";
    AudioMicrophoneOnGreenBold => "audioMicrophoneOnGreenBold", "\u{f1b6}", "audio-microphone-on-green-bold";
    AudioMicrophoneOnGreenColoredBold => "audioMicrophoneOnGreenColoredBold", "\u{f1b7}", "audio-microphone-on-green-colored-bold";
    AudioMicrophoneOnGreenColoredLight => "audioMicrophoneOnGreenColoredLight", "\u{f1b8}", "audio-microphone-on-green-colored-light";
    AudioMicrophoneOnGreenColoredRegular => "audioMicrophoneOnGreenColoredRegular", "\u{f1b9}", "audio-microphone-on-green-colored-regular";
    AudioMicrophoneOnGreenLight => "audioMicrophoneOnGreenLight", "\u{f1ba}", "audio-microphone-on-green-light";
    AudioMicrophoneOnGreenRegular => "audioMicrophoneOnGreenRegular", "\u{f1bb}", "audio-microphone-on-green-regular";
    AudioMicrophoneOnLight => "audioMicrophoneOnLight", "\u{f1bc}", "audio-microphone-on-light";
    AudioMicrophoneOnRegular => "audioMicrophoneOnRegular", "\u{f1bd}", "audio-microphone-on-regular";
    AudioOnlyBold => "audioOnlyBold", "\u{f1be}", "audio-only-bold";
    AudioOnlyLight => "audioOnlyLight", "\u{f1bf}", "audio-only-light";
    AudioOnlyRegular => "audioOnlyRegular", "\u{f1c0}", "audio-only-regular";
    AudioOptionsBold => "audioOptionsBold", "\u{f1c1}", "audio-options-bold";
    AudioOptionsFilled => "audioOptionsFilled", "\u{f1c2}", "audio-options-filled";
    AudioOptionsLight => "audioOptionsLight", "\u{f1c3}", "audio-options-light";
    AudioOptionsRegular => "audioOptionsRegular", "\u{f1c4}", "audio-options-regular";
    BackBold => "backBold", "\u{f1c5}", "back-bold";
    BackLight => "backLight", "\u{f1c6}", "back-light";
    BackRegular => "backRegular", "\u{f1c7}", "back-regular";
    BackToFullScreenBold => "backToFullScreenBold", "\u{f1c8}", "back-to-full-screen-bold";
    BackToFullScreenLight => "backToFullScreenLight", "\u{f1c9}", "back-to-full-screen-light";
    BackToFullScreenRegular => "backToFullScreenRegular", "\u{f1ca}", "back-to-full-screen-regular";
    BacklightBold => "backlightBold", "\u{f1cb}", "backlight-bold";
    BacklightLight => "backlightLight", "\u{f1cc}", "backlight-light";
    BacklightRegular => "backlightRegular", "\u{f1cd}", "backlight-regular";
    BackspaceBold => "backspaceBold", "\u{f1ce}", "backspace-bold";
    BackspaceLight => "backspaceLight", "\u{f1cf}", "backspace-light";
    BackspaceRegular => "backspaceRegular", "\u{f1d0}", "backspace-regular";
    BackupDataBold => "backupDataBold", "\u{f1d1}", "backup-data-bold";
    BackupDataLight => "backupDataLight", "\u{f1d2}", "backup-data-light";
    BackupDataRegular => "backupDataRegular", "\u{f1d3}", "backup-data-regular";
    BarcodeBold => "barcodeBold", "\u{f1d4}", "barcode-bold";
    BarcodeLight => "barcodeLight", "\u{f1d5}", "barcode-light";
    BarcodeRegular => "barcodeRegular", "\u{f1d6}", "barcode-regular";
    BatteryChargingBold => "batteryChargingBold", "\u{f1d7}", "battery-charging-bold";
    BatteryChargingLight => "batteryChargingLight", "\u{f1d8}", "battery-charging-light";
    BatteryChargingRegular => "batteryChargingRegular", "\u{f1d9}", "battery-charging-regular";
    BatteryEmptyBold => "batteryEmptyBold", "\u{f1da}", "battery-empty-bold";
    BatteryEmptyLight => "batteryEmptyLight", "\u{f1db}", "battery-empty-light";
    BatteryEmptyRegular => "batteryEmptyRegular", "\u{f1dc}", "battery-empty-regular";
    BatteryHighBold => "batteryHighBold", "\u{f1dd}", "battery-high-bold";
    BatteryHighLight => "batteryHighLight", "\u{f1de}", "battery-high-light";
    BatteryHighRegular => "batteryHighRegular", "\u{f1df}", "battery-high-regular";
    BatteryLowBold => "batteryLowBold", "\u{f1e0}", "battery-low-bold";
    BatteryLowLight => "batteryLowLight", "\u{f1e1}", "battery-low-light";
    BatteryLowRegular => "batteryLowRegular", "\u{f1e2}", "battery-low-regular";
    BatteryMediumBold => "batteryMediumBold", "\u{f1e3}", "battery-medium-bold";
    BatteryMediumLight => "batteryMediumLight", "\u{f1e4}", "battery-medium-light";
    BatteryMediumRegular => "batteryMediumRegular", "\u{f1e5}", "battery-medium-regular";
    BitmojiConnectBold => "bitmojiConnectBold", "\u{f1e6}", "bitmoji-connect-bold";
    BitmojiConnectLight => "bitmojiConnectLight", "\u{f1e7}", "bitmoji-connect-light";
    BitmojiConnectRegular => "bitmojiConnectRegular", "\u{f1e8}", "bitmoji-connect-regular";
    BitmojiConnectedBold => "bitmojiConnectedBold", "\u{f1e9}", "bitmoji-connected-bold";
    BitmojiConnectedFilled => "bitmojiConnectedFilled", "\u{f1ea}", "bitmoji-connected-filled";
    BitmojiConnectedLight => "bitmojiConnectedLight", "\u{f1eb}", "bitmoji-connected-light";
    BitmojiConnectedRegular => "bitmojiConnectedRegular", "\u{f1ec}", "bitmoji-connected-regular";
    BlockQuoteBold => "blockQuoteBold", "\u{f1ed}", "block-quote-bold";
    BlockQuoteLight => "blockQuoteLight", "\u{f1ee}", "block-quote-light";
    BlockQuoteRegular => "blockQuoteRegular", "\u{f1ef}", "block-quote-regular";
    BlockedBold => "blockedBold", "\u{f1f0}", "blocked-bold";
    BlockedLight => "blockedLight", "\u{f1f1}", "blocked-light";
    BlockedRegular => "blockedRegular", "\u{f1f2}", "blocked-regular";
    BluetoothBold => "bluetoothBold", "\u{f1f3}", "bluetooth-bold";
    BluetoothContainerMutedBold => "bluetoothContainerMutedBold", "\u{f1f4}", "bluetooth-container-muted-bold";
    BluetoothContainerMutedLight => "bluetoothContainerMutedLight", "\u{f1f5}", "bluetooth-container-muted-light";
    BluetoothContainerMutedRegular => "bluetoothContainerMutedRegular", "\u{f1f6}", "bluetooth-container-muted-regular";
    BluetoothLight => "bluetoothLight", "\u{f1f7}", "bluetooth-light";
    BluetoothRegular => "bluetoothRegular", "\u{f1f8}", "bluetooth-regular";
    BoldBold => "boldBold", "\u{f1f9}", "bold-bold";
    BoldLight => "boldLight", "\u{f1fa}", "bold-light";
    BoldRegular => "boldRegular", "\u{f1fb}", "bold-regular";
    BookmarkBold => "bookmarkBold", "\u{f1fc}", "bookmark-bold";
    BookmarkLight => "bookmarkLight", "\u{f1fd}", "bookmark-light";
    BookmarkRegular => "bookmarkRegular", "\u{f1fe}", "bookmark-regular";
    BotActiveBold => "botActiveBold", "\u{f1ff}", "bot-active-bold";
    BotActiveLight => "botActiveLight", "\u{f200}", "bot-active-light";
    BotActiveRegular => "botActiveRegular", "\u{f201}", "bot-active-regular";
    BotCustomerAssistantBold => "botCustomerAssistantBold", "\u{f202}", "bot-customer-assistant-bold";
    BotCustomerAssistantLight => "botCustomerAssistantLight", "\u{f203}", "bot-customer-assistant-light";
    BotCustomerAssistantRegular => "botCustomerAssistantRegular", "\u{f204}", "bot-customer-assistant-regular";
    BotExpertAssistantBold => "botExpertAssistantBold", "\u{f205}", "bot-expert-assistant-bold";
    BotExpertAssistantLight => "botExpertAssistantLight", "\u{f206}", "bot-expert-assistant-light";
    BotExpertAssistantRegular => "botExpertAssistantRegular", "\u{f207}", "bot-expert-assistant-regular";
    BotInactiveBold => "botInactiveBold", "\u{f208}", "bot-inactive-bold";
    BotInactiveLight => "botInactiveLight", "\u{f209}", "bot-inactive-light";
    BotInactiveRegular => "botInactiveRegular", "\u{f20a}", "bot-inactive-regular";
    BoxBold => "boxBold", "\u{f20b}", "box-bold";
    BoxLight => "boxLight", "\u{f20c}", "box-light";
    BoxRegular => "boxRegular", "\u{f20d}", "box-regular";
    BreakoutSessionBold => "breakoutSessionBold", "\u{f20e}", "breakout-session-bold";
    BreakoutSessionFilled => "breakoutSessionFilled", "\u{f20f}", "breakout-session-filled";
    BreakoutSessionLight => "breakoutSessionLight", "\u{f210}", "breakout-session-light";
    BreakoutSessionRegular => "breakoutSessionRegular", "\u{f211}", "breakout-session-regular";
    BrightnessBold => "brightnessBold", "\u{f212}", "brightness-bold";
    BrightnessHighBold => "brightnessHighBold", "\u{f213}", "brightness-high-bold";
    BrightnessHighLight => "brightnessHighLight", "\u{f214}", "brightness-high-light";
    BrightnessHighRegular => "brightnessHighRegular", "\u{f215}", "brightness-high-regular";
    BrightnessLight => "brightnessLight", "\u{f216}", "brightness-light";
    BrightnessRegular => "brightnessRegular", "\u{f217}", "brightness-regular";
    BrokenFileBold => "brokenFileBold", "\u{f218}", "broken-file-bold";
    BrokenFileFilled => "brokenFileFilled", "\u{f219}", "broken-file-filled";
    BrokenFileLight => "brokenFileLight", "\u{f21a}", "broken-file-light";
    BrokenFileRegular => "brokenFileRegular", "\u{f21b}", "broken-file-regular";
    BrowserBold => "browserBold", "\u{f21c}", "browser-bold";
    BrowserLight => "browserLight", "\u{f21d}", "browser-light";
    BrowserRegular => "browserRegular", "\u{f21e}", "browser-regular";
    CalendarAddBold => "calendarAddBold", "\u{f21f}", "calendar-add-bold";
    CalendarAddFilled => "calendarAddFilled", "\u{f220}", "calendar-add-filled";
    CalendarAddLight => "calendarAddLight", "\u{f221}", "calendar-add-light";
    CalendarAddRegular => "calendarAddRegular", "\u{f222}", "calendar-add-regular";
    CalendarDayBold => "calendarDayBold", "\u{f223}", "calendar-day-bold";
    CalendarDayFilled => "calendarDayFilled", "\u{f224}", "calendar-day-filled";
    CalendarDayLight => "calendarDayLight", "\u{f225}", "calendar-day-light";
    CalendarDayRegular => "calendarDayRegular", "\u{f226}", "calendar-day-regular";
    CalendarEmptyBold => "calendarEmptyBold", "\u{f227}", "calendar-empty-bold";
    CalendarEmptyFilled => "calendarEmptyFilled", "\u{f228}", "calendar-empty-filled";
    CalendarEmptyLight => "calendarEmptyLight", "\u{f229}", "calendar-empty-light";
    CalendarEmptyRegular => "calendarEmptyRegular", "\u{f22a}", "calendar-empty-regular";
    CalendarExternalBold => "calendarExternalBold", "\u{f22b}", "calendar-external-bold";
    CalendarExternalLight => "calendarExternalLight", "\u{f22c}", "calendar-external-light";
    CalendarExternalRegular => "calendarExternalRegular", "\u{f22d}", "calendar-external-regular";
    CalendarMonthBold => "calendarMonthBold", "\u{f22e}", "calendar-month-bold";
    CalendarMonthFilled => "calendarMonthFilled", "\u{f22f}", "calendar-month-filled";
    CalendarMonthLight => "calendarMonthLight", "\u{f230}", "calendar-month-light";
    CalendarMonthRegular => "calendarMonthRegular", "\u{f231}", "calendar-month-regular";
    CalendarWeekBold => "calendarWeekBold", "\u{f232}", "calendar-week-bold";
    CalendarWeekFilled => "calendarWeekFilled", "\u{f233}", "calendar-week-filled";
    CalendarWeekLight => "calendarWeekLight", "\u{f234}", "calendar-week-light";
    CalendarWeekRegular => "calendarWeekRegular", "\u{f235}", "calendar-week-regular";
    CalendarWeekViewBold => "calendarWeekViewBold", "\u{f236}", "calendar-week-view-bold";
    CalendarWeekViewFilled => "calendarWeekViewFilled", "\u{f237}", "calendar-week-view-filled";
    CalendarWeekViewLight => "calendarWeekViewLight", "\u{f238}", "calendar-week-view-light";
    CalendarWeekViewRegular => "calendarWeekViewRegular", "\u{f239}", "calendar-week-view-regular";
    CalendarWorkWeekBold => "calendarWorkWeekBold", "\u{f23a}", "calendar-work-week-bold";
    CalendarWorkWeekFilled => "calendarWorkWeekFilled", "\u{f23b}", "calendar-work-week-filled";
    CalendarWorkWeekLight => "calendarWorkWeekLight", "\u{f23c}", "calendar-work-week-light";
    CalendarWorkWeekRegular => "calendarWorkWeekRegular", "\u{f23d}", "calendar-work-week-regular";
    CallForwardSettingsBold => "callForwardSettingsBold", "\u{f23e}", "call-forward-settings-bold";
    CallForwardSettingsFilled => "callForwardSettingsFilled", "\u{f23f}", "call-forward-settings-filled";
    CallForwardSettingsLight => "callForwardSettingsLight", "\u{f240}", "call-forward-settings-light";
    CallForwardSettingsRegular => "callForwardSettingsRegular", "\u{f241}", "call-forward-settings-regular";
    CallHandlingBold => "callHandlingBold", "\u{f242}", "call-handling-bold";
    CallHandlingLight => "callHandlingLight", "\u{f243}", "call-handling-light";
    CallHandlingRegular => "callHandlingRegular", "\u{f244}", "call-handling-regular";
    CallHoldBold => "callHoldBold", "\u{f245}", "call-hold-bold";
    CallHoldFilled => "callHoldFilled", "\u{f246}", "call-hold-filled";
    CallHoldLight => "callHoldLight", "\u{f247}", "call-hold-light";
    CallHoldRegular => "callHoldRegular", "\u{f248}", "call-hold-regular";
    CallIncomingBold => "callIncomingBold", "\u{f249}", "call-incoming-bold";
    CallIncomingLight => "callIncomingLight", "\u{f24a}", "call-incoming-light";
    CallIncomingRegular => "callIncomingRegular", "\u{f24b}", "call-incoming-regular";
    CallListBold => "callListBold", "\u{f24c}", "call-list-bold";
    CallListLight => "callListLight", "\u{f24d}", "call-list-light";
    CallListRegular => "callListRegular", "\u{f24e}", "call-list-regular";
    CallMergeBold => "callMergeBold", "\u{f24f}", "call-merge-bold";
    CallMergeLight => "callMergeLight", "\u{f250}", "call-merge-light";
    CallMergeRegular => "callMergeRegular", "\u{f251}", "call-merge-regular";
    CallOutgoingBold => "callOutgoingBold", "\u{f252}", "call-outgoing-bold";
    CallOutgoingLight => "callOutgoingLight", "\u{f253}", "call-outgoing-light";
    CallOutgoingRegular => "callOutgoingRegular", "\u{f254}", "call-outgoing-regular";
    CallPickupBold => "callPickupBold", "\u{f255}", "call-pickup-bold";
    CallPickupFilled => "callPickupFilled", "\u{f256}", "call-pickup-filled";
    CallPickupLight => "callPickupLight", "\u{f257}", "call-pickup-light";
    CallPickupRegular => "callPickupRegular", "\u{f258}", "call-pickup-regular";
    CallPrivateBold => "callPrivateBold", "\u{f259}", "call-private-bold";
    CallPrivateLight => "callPrivateLight", "\u{f25a}", "call-private-light";
    CallPrivateRegular => "callPrivateRegular", "\u{f25b}", "call-private-regular";
    CallRequestBold => "callRequestBold", "\u{f25c}", "call-request-bold";
    CallRequestFilled => "callRequestFilled", "\u{f25d}", "call-request-filled";
    CallRequestLight => "callRequestLight", "\u{f25e}", "call-request-light";
    CallRequestRegular => "callRequestRegular", "\u{f25f}", "call-request-regular";
    CallRoomBold => "callRoomBold", "\u{f260}", "call-room-bold";
    CallRoomLight => "callRoomLight", "\u{f261}", "call-room-light";
    CallRoomRegular => "callRoomRegular", "\u{f262}", "call-room-regular";
    CallSettingsBold => "callSettingsBold", "\u{f263}", "call-settings-bold";
    CallSettingsLight => "callSettingsLight", "\u{f264}", "call-settings-light";
    CallSettingsRegular => "callSettingsRegular", "\u{f265}", "call-settings-regular";
    CallSplitBold => "callSplitBold", "\u{f266}", "call-split-bold";
    CallSplitLight => "callSplitLight", "\u{f267}", "call-split-light";
    CallSplitRegular => "callSplitRegular", "\u{f268}", "call-split-regular";
    CallSwapBold => "callSwapBold", "\u{f269}", "call-swap-bold";
    CallSwapLight => "callSwapLight", "\u{f26a}", "call-swap-light";
    CallSwapRegular => "callSwapRegular", "\u{f26b}", "call-swap-regular";
    CallVoicemailBold => "callVoicemailBold", "\u{f26c}", "call-voicemail-bold";
    CallVoicemailLight => "callVoicemailLight", "\u{f26d}", "call-voicemail-light";
    CallVoicemailRegular => "callVoicemailRegular", "\u{f26e}", "call-voicemail-regular";
    CallrateBold => "callrateBold", "\u{f26f}", "callrate-bold";
    CallrateLight => "callrateLight", "\u{f270}", "callrate-light";
    CallrateRegular => "callrateRegular", "\u{f271}", "callrate-regular";
    CameraAuxBold => "cameraAuxBold", "\u{f272}", "camera-aux-bold";
    CameraAuxFilled => "cameraAuxFilled", "\u{f273}", "camera-aux-filled";
    CameraAuxLight => "cameraAuxLight", "\u{f274}", "camera-aux-light";
    CameraAuxRegular => "cameraAuxRegular", "\u{f275}", "camera-aux-regular";
    CameraBold => "cameraBold", "\u{f276}", "camera-bold";
    CameraFilled => "cameraFilled", "\u{f277}", "camera-filled";
    CameraLight => "cameraLight", "\u{f278}", "camera-light";
    CameraMutedBold => "cameraMutedBold", "\u{f279}", "camera-muted-bold";
    CameraMutedFilled => "cameraMutedFilled", "\u{f27a}", "camera-muted-filled";
    CameraMutedLight => "cameraMutedLight", "\u{f27b}", "camera-muted-light";
    CameraMutedRegular => "cameraMutedRegular", "\u{f27c}", "camera-muted-regular";
    CameraOnBold => "cameraOnBold", "\u{f27d}", "camera-on-bold";
    CameraOnColoredBold => "cameraOnColoredBold", "\u{f27e}", "camera-on-colored-bold";
    CameraOnColoredFilled => "cameraOnColoredFilled", "\u{f27f}", "camera-on-colored-filled";
    CameraOnColoredLight => "cameraOnColoredLight", "\u{f280}", "camera-on-colored-light";
    CameraOnColoredRegular => "cameraOnColoredRegular", "\u{f281}", "camera-on-colored-regular";
    CameraOnFilled => "cameraOnFilled", "\u{f282}", "camera-on-filled";
    CameraOnLight => "cameraOnLight", "\u{f283}", "camera-on-light";
    CameraOnRegular => "cameraOnRegular", "\u{f284}", "camera-on-regular";
    CameraPhotoBold => "cameraPhotoBold", "\u{f285}", "camera-photo-bold";
    CameraPhotoFilled => "cameraPhotoFilled", "\u{f286}", "camera-photo-filled";
    CameraPhotoLight => "cameraPhotoLight", "\u{f287}", "camera-photo-light";
    CameraPhotoRegular => "cameraPhotoRegular", "\u{f288}", "camera-photo-regular";
    CameraPresenceBold => "cameraPresenceBold", "\u{f289}", "camera-presence-bold";
    CameraPresenceFilled => "cameraPresenceFilled", "\u{f28a}", "camera-presence-filled";
    CameraPresenceLight => "cameraPresenceLight", "\u{f28b}", "camera-presence-light";
    CameraPresenceRegular => "cameraPresenceRegular", "\u{f28c}", "camera-presence-regular";
    CameraRegular => "cameraRegular", "\u{f28d}", "camera-regular";
    CameraSwapBold => "cameraSwapBold", "\u{f28e}", "camera-swap-bold";
    CameraSwapLight => "cameraSwapLight", "\u{f28f}", "camera-swap-light";
    CameraSwapRegular => "cameraSwapRegular", "\u{f290}", "camera-swap-regular";
    CancelBold => "cancelBold", "\u{f291}", "cancel-bold";
    CancelLight => "cancelLight", "\u{f292}", "cancel-light";
    CancelRegular => "cancelRegular", "\u{f293}", "cancel-regular";
    CapsLockBold => "capsLockBold", "\u{f294}", "caps-lock-bold";
    CapsLockLight => "capsLockLight", "\u{f295}", "caps-lock-light";
    CapsLockRegular => "capsLockRegular", "\u{f296}", "caps-lock-regular";
    CaptureRewindBold => "captureRewindBold", "\u{f297}", "capture-rewind-bold";
    CaptureRewindLight => "captureRewindLight", "\u{f298}", "capture-rewind-light";
    CaptureRewindRegular => "captureRewindRegular", "\u{f299}", "capture-rewind-regular";
    CellularBold => "cellularBold", "\u{f29a}", "cellular-bold";
    CellularLight => "cellularLight", "\u{f29b}", "cellular-light";
    CellularRegular => "cellularRegular", "\u{f29c}", "cellular-regular";
    CertifiedBold => "certifiedBold", "\u{f29d}", "certified-bold";
    CertifiedLight => "certifiedLight", "\u{f29e}", "certified-light";
    CertifiedRegular => "certifiedRegular", "\u{f29f}", "certified-regular";
    ChPSearchBold => "chPSearchBold", "\u{f2a0}", "ch-p-search-bold";
    ChPSearchLight => "chPSearchLight", "\u{f2a1}", "ch-p-search-light";
    ChPSearchRegular => "chPSearchRegular", "\u{f2a2}", "ch-p-search-regular";
    ChatBold => "chatBold", "\u{f2a3}", "chat-bold";
    ChatFilled => "chatFilled", "\u{f2a4}", "chat-filled";
    ChatGroupBold => "chatGroupBold", "\u{f2a5}", "chat-group-bold";
    ChatGroupFilled => "chatGroupFilled", "\u{f2a6}", "chat-group-filled";
    ChatGroupLight => "chatGroupLight", "\u{f2a7}", "chat-group-light";
    ChatGroupRegular => "chatGroupRegular", "\u{f2a8}", "chat-group-regular";
    ChatLight => "chatLight", "\u{f2a9}", "chat-light";
    ChatMuteBold => "chatMuteBold", "\u{f2aa}", "chat-mute-bold";
    ChatMuteLight => "chatMuteLight", "\u{f2ab}", "chat-mute-light";
    ChatMuteRegular => "chatMuteRegular", "\u{f2ac}", "chat-mute-regular";
    ChatRegular => "chatRegular", "\u{f2ad}", "chat-regular";
    CheckBold => "checkBold", "\u{f2ae}", "check-bold";
    CheckCircleBadgeFilled => "checkCircleBadgeFilled", "\u{f2af}", "check-circle-badge-filled";
    CheckCircleBold => "checkCircleBold", "\u{f2b0}", "check-circle-bold";
    CheckCircleFilled => "checkCircleFilled", "\u{f2b1}", "check-circle-filled";
    CheckCircleLight => "checkCircleLight", "\u{f2b2}", "check-circle-light";
    CheckCircleRegular => "checkCircleRegular", "\u{f2b3}", "check-circle-regular";
    CheckLight => "checkLight", "\u{f2b4}", "check-light";
    CheckRegular => "checkRegular", "\u{f2b5}", "check-regular";
    ClearBold => "clearBold", "\u{f2b6}", "clear-bold";
    ClearFilled => "clearFilled", "\u{f2b7}", "clear-filled";
    ClearLight => "clearLight", "\u{f2b8}", "clear-light";
    ClearRegular => "clearRegular", "\u{f2b9}", "clear-regular";
    CloseSpaceBold => "closeSpaceBold", "\u{f2ba}", "close-space-bold";
    CloseSpaceLight => "closeSpaceLight", "\u{f2bb}", "close-space-light";
    CloseSpaceRegular => "closeSpaceRegular", "\u{f2bc}", "close-space-regular";
    ClosedCaptionBadgeBold => "closedCaptionBadgeBold", "\u{f2bd}", "closed-caption-badge-bold";
    ClosedCaptionBadgeLight => "closedCaptionBadgeLight", "\u{f2be}", "closed-caption-badge-light";
    ClosedCaptionBadgeRegular => "closedCaptionBadgeRegular", "\u{f2bf}", "closed-caption-badge-regular";
    ClosedCaptionsBold => "closedCaptionsBold", "\u{f2c0}", "closed-captions-bold";
    ClosedCaptionsFilled => "closedCaptionsFilled", "\u{f2c1}", "closed-captions-filled";
    ClosedCaptionsLight => "closedCaptionsLight", "\u{f2c2}", "closed-captions-light";
    ClosedCaptionsRegular => "closedCaptionsRegular", "\u{f2c3}", "closed-captions-regular";
    CloudBold => "cloudBold", "\u{f2c4}", "cloud-bold";
    CloudFilled => "cloudFilled", "\u{f2c5}", "cloud-filled";
    CloudFrameBold => "cloudFrameBold", "\u{f2c6}", "cloud-frame-bold";
    CloudFrameFilled => "cloudFrameFilled", "\u{f2c7}", "cloud-frame-filled";
    CloudFrameRegular => "cloudFrameRegular", "\u{f2c8}", "cloud-frame-regular";
    CloudFramedFilled => "cloudFramedFilled", "\u{f2c9}", "cloud-framed-filled";
    CloudFramedLight => "cloudFramedLight", "\u{f2ca}", "cloud-framed-light";
    CloudLight => "cloudLight", "\u{f2cb}", "cloud-light";
    CloudMutedBold => "cloudMutedBold", "\u{f2cc}", "cloud-muted-bold";
    CloudMutedFilled => "cloudMutedFilled", "\u{f2cd}", "cloud-muted-filled";
    CloudMutedLight => "cloudMutedLight", "\u{f2ce}", "cloud-muted-light";
    CloudMutedRegular => "cloudMutedRegular", "\u{f2cf}", "cloud-muted-regular";
    CloudRegular => "cloudRegular", "\u{f2d0}", "cloud-regular";
    CloudUploadBold => "cloudUploadBold", "\u{f2d1}", "cloud-upload-bold";
    CloudUploadLight => "cloudUploadLight", "\u{f2d2}", "cloud-upload-light";
    CloudUploadRegular => "cloudUploadRegular", "\u{f2d3}", "cloud-upload-regular";
    CodeBlockBold => "codeBlockBold", "\u{f2d4}", "code-block-bold";
    CodeBlockLight => "codeBlockLight", "\u{f2d5}", "code-block-light";
    CodeBlockRegular => "codeBlockRegular", "\u{f2d6}", "code-block-regular";
    ColorBold => "colorBold", "\u{f2d7}", "color-bold";
    ColorLight => "colorLight", "\u{f2d8}", "color-light";
    ColorRegular => "colorRegular", "\u{f2d9}", "color-regular";
    CommentingBold => "commentingBold", "\u{f2da}", "commenting-bold";
    CommentingFilled => "commentingFilled", "\u{f2db}", "commenting-filled";
    CommentingLight => "commentingLight", "\u{f2dc}", "commenting-light";
    CommentingRegular => "commentingRegular", "\u{f2dd}", "commenting-regular";
    CompanyBold => "companyBold", "\u{f2de}", "company-bold";
    CompanyLight => "companyLight", "\u{f2df}", "company-light";
    CompanyRegular => "companyRegular", "\u{f2e0}", "company-regular";
    ComputerBold => "computerBold", "\u{f2e1}", "computer-bold";
    ComputerLight => "computerLight", "\u{f2e2}", "computer-light";
    ComputerRegular => "computerRegular", "\u{f2e3}", "computer-regular";
    ConciergeBold => "conciergeBold", "\u{f2e4}", "concierge-bold";
    ConciergeLight => "conciergeLight", "\u{f2e5}", "concierge-light";
    ConciergeRegular => "conciergeRegular", "\u{f2e6}", "concierge-regular";
    ContactCardBold => "contactCardBold", "\u{f2e7}", "contact-card-bold";
    ContactCardFilled => "contactCardFilled", "\u{f2e8}", "contact-card-filled";
    ContactCardLight => "contactCardLight", "\u{f2e9}", "contact-card-light";
    ContactCardRegular => "contactCardRegular", "\u{f2ea}", "contact-card-regular";
    ContactGroupBold => "contactGroupBold", "\u{f2eb}", "contact-group-bold";
    ContactGroupFilled => "contactGroupFilled", "\u{f2ec}", "contact-group-filled";
    ContactGroupLight => "contactGroupLight", "\u{f2ed}", "contact-group-light";
    ContactGroupRegular => "contactGroupRegular", "\u{f2ee}", "contact-group-regular";
    ContactsBold => "contactsBold", "\u{f2ef}", "contacts-bold";
    ContactsFilled => "contactsFilled", "\u{f2f0}", "contacts-filled";
    ContactsLight => "contactsLight", "\u{f2f1}", "contacts-light";
    ContactsRegular => "contactsRegular", "\u{f2f2}", "contacts-regular";
    ContentDownloadBold => "contentDownloadBold", "\u{f2f3}", "content-download-bold";
    ContentDownloadFilled => "contentDownloadFilled", "\u{f2f4}", "content-download-filled";
    ContentDownloadLight => "contentDownloadLight", "\u{f2f5}", "content-download-light";
    ContentDownloadRegular => "contentDownloadRegular", "\u{f2f6}", "content-download-regular";
    ContentShareBold => "contentShareBold", "\u{f2f7}", "content-share-bold";
    ContentShareLight => "contentShareLight", "\u{f2f8}", "content-share-light";
    ContentShareRegular => "contentShareRegular", "\u{f2f9}", "content-share-regular";
    ContrastBold => "contrastBold", "\u{f2fa}", "contrast-bold";
    ContrastLight => "contrastLight", "\u{f2fb}", "contrast-light";
    ContrastRegular => "contrastRegular", "\u{f2fc}", "contrast-regular";
    CopyBold => "copyBold", "\u{f2fd}", "copy-bold";
    CopyLight => "copyLight", "\u{f2fe}", "copy-light";
    CopyRegular => "copyRegular", "\u{f2ff}", "copy-regular";
    CpuBold => "cpuBold", "\u{f300}", "cpu-bold";
    CpuLight => "cpuLight", "\u{f301}", "cpu-light";
    CpuRegular => "cpuRegular", "\u{f302}", "cpu-regular";
    CropBold => "cropBold", "\u{f303}", "crop-bold";
    CropLight => "cropLight", "\u{f304}", "crop-light";
    CropRegular => "cropRegular", "\u{f305}", "crop-regular";
    CucmConnectionBold => "cucmConnectionBold", "\u{f306}", "cucm-connection-bold";
    CucmConnectionLight => "cucmConnectionLight", "\u{f307}", "cucm-connection-light";
    CucmConnectionRegular => "cucmConnectionRegular", "\u{f308}", "cucm-connection-regular";
    DashboardBold => "dashboardBold", "\u{f309}", "dashboard-bold";
    DashboardFilled => "dashboardFilled", "\u{f30a}", "dashboard-filled";
    DashboardLight => "dashboardLight", "\u{f30b}", "dashboard-light";
    DashboardRegular => "dashboardRegular", "\u{f30c}", "dashboard-regular";
    DeleteBold => "deleteBold", "\u{f30d}", "delete-bold";
    DeleteLight => "deleteLight", "\u{f30e}", "delete-light";
    DeleteRegular => "deleteRegular", "\u{f30f}", "delete-regular";
    DeskPhoneBold => "deskPhoneBold", "\u{f310}", "desk-phone-bold";
    DeskPhoneFilled => "deskPhoneFilled", "\u{f311}", "desk-phone-filled";
    DeskPhoneLight => "deskPhoneLight", "\u{f312}", "desk-phone-light";
    DeskPhoneRegular => "deskPhoneRegular", "\u{f313}", "desk-phone-regular";
    DeskPhoneWarningBold => "deskPhoneWarningBold", "\u{f314}", "desk-phone-warning-bold";
    DeskPhoneWarningLight => "deskPhoneWarningLight", "\u{f315}", "desk-phone-warning-light";
    DeskPhoneWarningRegular => "deskPhoneWarningRegular", "\u{f316}", "desk-phone-warning-regular";
    DeviceConnectionBold => "deviceConnectionBold", "\u{f317}", "device-connection-bold";
    DeviceConnectionFilled => "deviceConnectionFilled", "\u{f318}", "device-connection-filled";
    DeviceConnectionLight => "deviceConnectionLight", "\u{f319}", "device-connection-light";
    DeviceConnectionRegular => "deviceConnectionRegular", "\u{f31a}", "device-connection-regular";
    DiagnosticsBold => "diagnosticsBold", "\u{f31b}", "diagnostics-bold";
    DiagnosticsLight => "diagnosticsLight", "\u{f31c}", "diagnostics-light";
    DiagnosticsRegular => "diagnosticsRegular", "\u{f31d}", "diagnostics-regular";
    DialpadBold => "dialpadBold", "\u{f31e}", "dialpad-bold";
    DialpadLight => "dialpadLight", "\u{f31f}", "dialpad-light";
    DialpadRegular => "dialpadRegular", "\u{f320}", "dialpad-regular";
    DirectionalPadBold => "directionalPadBold", "\u{f321}", "directional-pad-bold";
    DirectionalPadFilled => "directionalPadFilled", "\u{f322}", "directional-pad-filled";
    DirectionalPadLight => "directionalPadLight", "\u{f323}", "directional-pad-light";
    DirectionalPadRegular => "directionalPadRegular", "\u{f324}", "directional-pad-regular";
    DirectoryBold => "directoryBold", "\u{f325}", "directory-bold";
    DirectoryLight => "directoryLight", "\u{f326}", "directory-light";
    DirectoryRegular => "directoryRegular", "\u{f327}", "directory-regular";
    DiscBold => "discBold", "\u{f328}", "disc-bold";
    DiscDisconnectedBold => "discDisconnectedBold", "\u{f329}", "disc-disconnected-bold";
    DiscDisconnectedLight => "discDisconnectedLight", "\u{f32a}", "disc-disconnected-light";
    DiscDisconnectedRegular => "discDisconnectedRegular", "\u{f32b}", "disc-disconnected-regular";
    DiscLight => "discLight", "\u{f32c}", "disc-light";
    DiscRegular => "discRegular", "\u{f32d}", "disc-regular";
    DisconnectBold => "disconnectBold", "\u{f32e}", "disconnect-bold";
    DisconnectLight => "disconnectLight", "\u{f32f}", "disconnect-light";
    DisconnectRegular => "disconnectRegular", "\u{f330}", "disconnect-regular";
    DislikeBold => "dislikeBold", "\u{f331}", "dislike-bold";
    DislikeFilled => "dislikeFilled", "\u{f332}", "dislike-filled";
    DislikeLight => "dislikeLight", "\u{f333}", "dislike-light";
    DislikeRegular => "dislikeRegular", "\u{f334}", "dislike-regular";
    DisplayBold => "displayBold", "\u{f335}", "display-bold";
    DisplayInputBold => "displayInputBold", "\u{f336}", "display-input-bold";
    DisplayInputLight => "displayInputLight", "\u{f337}", "display-input-light";
    DisplayInputRegular => "displayInputRegular", "\u{f338}", "display-input-regular";
    DisplayLight => "displayLight", "\u{f339}", "display-light";
    DisplayRegular => "displayRegular", "\u{f33a}", "display-regular";
    DisplayWarningBold => "displayWarningBold", "\u{f33b}", "display-warning-bold";
    DisplayWarningLight => "displayWarningLight", "\u{f33c}", "display-warning-light";
    DisplayWarningRegular => "displayWarningRegular", "\u{f33d}", "display-warning-regular";
    DndPresenceBold => "dndPresenceBold", "\u{f33e}", "dnd-presence-bold";
    DndPresenceFilled => "dndPresenceFilled", "\u{f33f}", "dnd-presence-filled";
    DndPresenceLight => "dndPresenceLight", "\u{f340}", "dnd-presence-light";
    DndPresenceRegular => "dndPresenceRegular", "\u{f341}", "dnd-presence-regular";
    DndPresenceSmallFilled => "dndPresenceSmallFilled", "\u{f342}", "dnd-presence-small-filled";
    DocumentBold => "documentBold", "\u{f343}", "document-bold";
    DocumentCameraBold => "documentCameraBold", "\u{f344}", "document-camera-bold";
    DocumentCameraDisconnectedBold => "documentCameraDisconnectedBold", "\u{f345}", "document-camera-disconnected-bold";
    DocumentCameraDisconnectedLight => "documentCameraDisconnectedLight", "\u{f346}", "document-camera-disconnected-light";
    DocumentCameraDisconnectedRegular => "documentCameraDisconnectedRegular", "\u{f347}", "document-camera-disconnected-regular";
    DocumentCameraLight => "documentCameraLight", "\u{f348}", "document-camera-light";
    DocumentCameraRegular => "documentCameraRegular", "\u{f349}", "document-camera-regular";
    DocumentCreateBold => "documentCreateBold", "\u{f34a}", "document-create-bold";
    DocumentCreateFilled => "documentCreateFilled", "\u{f34b}", "document-create-filled";
    DocumentCreateLight => "documentCreateLight", "\u{f34c}", "document-create-light";
    DocumentCreateRegular => "documentCreateRegular", "\u{f34d}", "document-create-regular";
    DocumentFilled => "documentFilled", "\u{f34e}", "document-filled";
    DocumentLight => "documentLight", "\u{f34f}", "document-light";
    DocumentMoveBold => "documentMoveBold", "\u{f350}", "document-move-bold";
    DocumentMoveFilled => "documentMoveFilled", "\u{f351}", "document-move-filled";
    DocumentMoveLight => "documentMoveLight", "\u{f352}", "document-move-light";
    DocumentMoveRegular => "documentMoveRegular", "\u{f353}", "document-move-regular";
    DocumentRegular => "documentRegular", "\u{f354}", "document-regular";
    DocumentShareBold => "documentShareBold", "\u{f355}", "document-share-bold";
    DocumentShareFilled => "documentShareFilled", "\u{f356}", "document-share-filled";
    DocumentShareLight => "documentShareLight", "\u{f357}", "document-share-light";
    DocumentShareRegular => "documentShareRegular", "\u{f358}", "document-share-regular";
    DonutChartBold => "donutChartBold", "\u{f359}", "donut-chart-bold";
    DonutChartFilled => "donutChartFilled", "\u{f35a}", "donut-chart-filled";
    DonutChartLight => "donutChartLight", "\u{f35b}", "donut-chart-light";
    DonutChartRegular => "donutChartRegular", "\u{f35c}", "donut-chart-regular";
    DownloadBold => "downloadBold", "\u{f35d}", "download-bold";
    DownloadFilled => "downloadFilled", "\u{f35e}", "download-filled";
    DownloadLight => "downloadLight", "\u{f35f}", "download-light";
    DownloadRegular => "downloadRegular", "\u{f360}", "download-regular";
    DraftIndicatorSmallFilled => "draftIndicatorSmallFilled", "\u{f361}", "draft-indicator-small-filled";
    DragBold => "dragBold", "\u{f362}", "drag-bold";
    DragLight => "dragLight", "\u{f363}", "drag-light";
    DragRegular => "dragRegular", "\u{f364}", "drag-regular";
    Dx70Bold => "dx70Bold", "\u{f365}", "dx70-bold";
    Dx70Light => "dx70Light", "\u{f366}", "dx70-light";
    Dx70Regular => "dx70Regular", "\u{f367}", "dx70-regular";
    Dx80Bold => "dx80Bold", "\u{f368}", "dx80-bold";
    Dx80Filled => "dx80Filled", "\u{f369}", "dx80-filled";
    Dx80Light => "dx80Light", "\u{f36a}", "dx80-light";
    Dx80Regular => "dx80Regular", "\u{f36b}", "dx80-regular";
    EditBold => "editBold", "\u{f36c}", "edit-bold";
    EditLight => "editLight", "\u{f36d}", "edit-light";
    EditRegular => "editRegular", "\u{f36e}", "edit-regular";
    EmailBold => "emailBold", "\u{f36f}", "email-bold";
    EmailFilled => "emailFilled", "\u{f370}", "email-filled";
    EmailInviteBold => "emailInviteBold", "\u{f371}", "email-invite-bold";
    EmailInviteLight => "emailInviteLight", "\u{f372}", "email-invite-light";
    EmailInviteRegular => "emailInviteRegular", "\u{f373}", "email-invite-regular";
    EmailLight => "emailLight", "\u{f374}", "email-light";
    EmailReadBold => "emailReadBold", "\u{f375}", "email-read-bold";
    EmailReadFilled => "emailReadFilled", "\u{f376}", "email-read-filled";
    EmailReadLight => "emailReadLight", "\u{f377}", "email-read-light";
    EmailReadRegular => "emailReadRegular", "\u{f378}", "email-read-regular";
    EmailRegular => "emailRegular", "\u{f379}", "email-regular";
    EmojiExcitedBold => "emojiExcitedBold", "\u{f37a}", "emoji-excited-bold";
    EmojiExcitedFilled => "emojiExcitedFilled", "\u{f37b}", "emoji-excited-filled";
    EmojiHappyBold => "emojiHappyBold", "\u{f37c}", "emoji-happy-bold";
    EmojiHappyFilled => "emojiHappyFilled", "\u{f37d}", "emoji-happy-filled";
    EmojiHappyLight => "emojiHappyLight", "\u{f37e}", "emoji-happy-light";
    EmojiHappyRegular => "emojiHappyRegular", "\u{f37f}", "emoji-happy-regular";
    EmojiPassiveBold => "emojiPassiveBold", "\u{f380}", "emoji-passive-bold";
    EmojiPassiveFilled => "emojiPassiveFilled", "\u{f381}", "emoji-passive-filled";
    EmojiPassiveLight => "emojiPassiveLight", "\u{f382}", "emoji-passive-light";
    EmojiPassiveRegular => "emojiPassiveRegular", "\u{f383}", "emoji-passive-regular";
    EmojiSadBold => "emojiSadBold", "\u{f384}", "emoji-sad-bold";
    EmojiSadFilled => "emojiSadFilled", "\u{f385}", "emoji-sad-filled";
    EmojiSadLight => "emojiSadLight", "\u{f386}", "emoji-sad-light";
    EmojiSadRegular => "emojiSadRegular", "\u{f387}", "emoji-sad-regular";
    EmojiUnhappyBold => "emojiUnhappyBold", "\u{f388}", "emoji-unhappy-bold";
    EmojiUnhappyFilled => "emojiUnhappyFilled", "\u{f389}", "emoji-unhappy-filled";
    EncryptionCircleFilled => "encryptionCircleFilled", "\u{f38a}", "encryption-circle-filled";
    EncryptionFilled => "encryptionFilled", "\u{f38b}", "encryption-filled";
    EndRemoteDesktopControlBold => "endRemoteDesktopControlBold", "\u{f38c}", "end-remote-desktop-control-bold";
    EndRemoteDesktopControlLight => "endRemoteDesktopControlLight", "\u{f38d}", "end-remote-desktop-control-light";
    EndRemoteDesktopControlRegular => "endRemoteDesktopControlRegular", "\u{f38e}", "end-remote-desktop-control-regular";
    EndToEndEncryptionCircleFilled => "endToEndEncryptionCircleFilled", "\u{f38f}", "end-to-end-encryption-circle-filled";
    EndToEndEncryptionFilled => "endToEndEncryptionFilled", "\u{f390}", "end-to-end-encryption-filled";
    EndpointBlockedBold => "endpointBlockedBold", "\u{f391}", "endpoint-blocked-bold";
    EndpointBlockedLight => "endpointBlockedLight", "\u{f392}", "endpoint-blocked-light";
    EndpointBlockedRegular => "endpointBlockedRegular", "\u{f393}", "endpoint-blocked-regular";
    EndpointBold => "endpointBold", "\u{f394}", "endpoint-bold";
    EndpointG270Bold => "endpointG270Bold", "\u{f395}", "endpoint-g2-70-bold";
    EndpointG270DualBold => "endpointG270DualBold", "\u{f396}", "endpoint-g2-70-dual-bold";
    EndpointG270DualLight => "endpointG270DualLight", "\u{f397}", "endpoint-g2-70-dual-light";
    EndpointG270DualRegular => "endpointG270DualRegular", "\u{f398}", "endpoint-g2-70-dual-regular";
    EndpointG270Light => "endpointG270Light", "\u{f399}", "endpoint-g2-70-light";
    EndpointG270Regular => "endpointG270Regular", "\u{f39a}", "endpoint-g2-70-regular";
    EndpointG2Bold => "endpointG2Bold", "\u{f39b}", "endpoint-g2-bold";
    EndpointG2Light => "endpointG2Light", "\u{f39c}", "endpoint-g2-light";
    EndpointG2Regular => "endpointG2Regular", "\u{f39d}", "endpoint-g2-regular";
    EndpointG2StandBold => "endpointG2StandBold", "\u{f39e}", "endpoint-g2-stand-bold";
    EndpointG2StandLight => "endpointG2StandLight", "\u{f39f}", "endpoint-g2-stand-light";
    EndpointG2StandRegular => "endpointG2StandRegular", "\u{f3a0}", "endpoint-g2-stand-regular";
    EndpointLight => "endpointLight", "\u{f3a1}", "endpoint-light";
    EndpointMx800Bold => "endpointMx800Bold", "\u{f3a2}", "endpoint-mx800-bold";
    EndpointMx800DualBold => "endpointMx800DualBold", "\u{f3a3}", "endpoint-mx800-dual-bold";
    EndpointMx800DualLight => "endpointMx800DualLight", "\u{f3a4}", "endpoint-mx800-dual-light";
    EndpointMx800DualRegular => "endpointMx800DualRegular", "\u{f3a5}", "endpoint-mx800-dual-regular";
    EndpointMx800Light => "endpointMx800Light", "\u{f3a6}", "endpoint-mx800-light";
    EndpointMx800Regular => "endpointMx800Regular", "\u{f3a7}", "endpoint-mx800-regular";
    EndpointRegular => "endpointRegular", "\u{f3a8}", "endpoint-regular";
    EndpointStandBold => "endpointStandBold", "\u{f3a9}", "endpoint-stand-bold";
    EndpointStandFilled => "endpointStandFilled", "\u{f3aa}", "endpoint-stand-filled";
    EndpointStandLight => "endpointStandLight", "\u{f3ab}", "endpoint-stand-light";
    EndpointStandRegular => "endpointStandRegular", "\u{f3ac}", "endpoint-stand-regular";
    EndpointWarningBold => "endpointWarningBold", "\u{f3ad}", "endpoint-warning-bold";
    EndpointWarningLight => "endpointWarningLight", "\u{f3ae}", "endpoint-warning-light";
    EndpointWarningRegular => "endpointWarningRegular", "\u{f3af}", "endpoint-warning-regular";
    EnterBold => "enterBold", "\u{f3b0}", "enter-bold";
    EnterLight => "enterLight", "\u{f3b1}", "enter-light";
    EnterRegular => "enterRegular", "\u{f3b2}", "enter-regular";
    EnterRoomBold => "enterRoomBold", "\u{f3b3}", "enter-room-bold";
    EnterRoomFilled => "enterRoomFilled", "\u{f3b4}", "enter-room-filled";
    EnterRoomLight => "enterRoomLight", "\u{f3b5}", "enter-room-light";
    EnterRoomRegular => "enterRoomRegular", "\u{f3b6}", "enter-room-regular";
    EraserBold => "eraserBold", "\u{f3b7}", "eraser-bold";
    EraserFilled => "eraserFilled", "\u{f3b8}", "eraser-filled";
    EraserLight => "eraserLight", "\u{f3b9}", "eraser-light";
    EraserRegular => "eraserRegular", "\u{f3ba}", "eraser-regular";
    ErrorLegacyBadgeFilled => "errorLegacyBadgeFilled", "\u{f3bb}", "error-legacy-badge-filled";
    ErrorLegacyBold => "errorLegacyBold", "\u{f3bc}", "error-legacy-bold";
    ErrorLegacyFilled => "errorLegacyFilled", "\u{f3bd}", "error-legacy-filled";
    ErrorLegacyLight => "errorLegacyLight", "\u{f3be}", "error-legacy-light";
    ErrorLegacyRegular => "errorLegacyRegular", "\u{f3bf}", "error-legacy-regular";
    EthernetBold => "ethernetBold", "\u{f3c0}", "ethernet-bold";
    EthernetLight => "ethernetLight", "\u{f3c1}", "ethernet-light";
    EthernetRegular => "ethernetRegular", "\u{f3c2}", "ethernet-regular";
    ExitRoomBold => "exitRoomBold", "\u{f3c3}", "exit-room-bold";
    ExitRoomLight => "exitRoomLight", "\u{f3c4}", "exit-room-light";
    ExitRoomRegular => "exitRoomRegular", "\u{f3c5}", "exit-room-regular";
    ExploreBold => "exploreBold", "\u{f3c6}", "explore-bold";
    ExploreLight => "exploreLight", "\u{f3c7}", "explore-light";
    ExploreRegular => "exploreRegular", "\u{f3c8}", "explore-regular";
    ExportBold => "exportBold", "\u{f3c9}", "export-bold";
    ExportLight => "exportLight", "\u{f3ca}", "export-light";
    ExportRegular => "exportRegular", "\u{f3cb}", "export-regular";
    ExtensionMobilityBold => "extensionMobilityBold", "\u{f3cc}", "extension-mobility-bold";
    ExtensionMobilityLight => "extensionMobilityLight", "\u{f3cd}", "extension-mobility-light";
    ExtensionMobilityRegular => "extensionMobilityRegular", "\u{f3ce}", "extension-mobility-regular";
    ExternalMessageBold => "externalMessageBold", "\u{f3cf}", "external-message-bold";
    ExternalMessageLight => "externalMessageLight", "\u{f3d0}", "external-message-light";
    ExternalMessageRegular => "externalMessageRegular", "\u{f3d1}", "external-message-regular";
    ExternalUserBold => "externalUserBold", "\u{f3d2}", "external-user-bold";
    ExternalUserLight => "externalUserLight", "\u{f3d3}", "external-user-light";
    ExternalUserRegular => "externalUserRegular", "\u{f3d4}", "external-user-regular";
    FamilyFontBold => "familyFontBold", "\u{f3d5}", "family-font-bold";
    FamilyFontLight => "familyFontLight", "\u{f3d6}", "family-font-light";
    FamilyFontRegular => "familyFontRegular", "\u{f3d7}", "family-font-regular";
    FastForwardBold => "fastForwardBold", "\u{f3d8}", "fast-forward-bold";
    FastForwardLight => "fastForwardLight", "\u{f3d9}", "fast-forward-light";
    FastForwardRegular => "fastForwardRegular", "\u{f3da}", "fast-forward-regular";
    FavoriteBold => "favoriteBold", "\u{f3db}", "favorite-bold";
    FavoriteFilled => "favoriteFilled", "\u{f3dc}", "favorite-filled";
    FavoriteLight => "favoriteLight", "\u{f3dd}", "favorite-light";
    FavoriteRegular => "favoriteRegular", "\u{f3de}", "favorite-regular";
    FavoritesBold => "favoritesBold", "\u{f3df}", "favorites-bold";
    FavoritesFilled => "favoritesFilled", "\u{f3e0}", "favorites-filled";
    FavoritesLight => "favoritesLight", "\u{f3e1}", "favorites-light";
    FavoritesRegular => "favoritesRegular", "\u{f3e2}", "favorites-regular";
    FbwBold => "fbwBold", "\u{f3e3}", "fbw-bold";
    FbwFilled => "fbwFilled", "\u{f3e4}", "fbw-filled";
    FbwLight => "fbwLight", "\u{f3e5}", "fbw-light";
    FbwRegular => "fbwRegular", "\u{f3e6}", "fbw-regular";
    FfwBold => "ffwBold", "\u{f3e7}", "ffw-bold";
    FfwFilled => "ffwFilled", "\u{f3e8}", "ffw-filled";
    FfwLight => "ffwLight", "\u{f3e9}", "ffw-light";
    FfwRegular => "ffwRegular", "\u{f3ea}", "ffw-regular";
    File3DBold => "file3DBold", "\u{f3eb}", "file-3D-bold";
    File3DFilled => "file3DFilled", "\u{f3ec}", "file-3D-filled";
    File3DLight => "file3DLight", "\u{f3ed}", "file-3D-light";
    File3DRegular => "file3DRegular", "\u{f3ee}", "file-3D-regular";
    FileAnalysisBold => "fileAnalysisBold", "\u{f3ef}", "file-analysis-bold";
    FileAnalysisFilled => "fileAnalysisFilled", "\u{f3f0}", "file-analysis-filled";
    FileAnalysisLight => "fileAnalysisLight", "\u{f3f1}", "file-analysis-light";
    FileAnalysisRegular => "fileAnalysisRegular", "\u{f3f2}", "file-analysis-regular";
    FileAnnotationBold => "fileAnnotationBold", "\u{f3f3}", "file-annotation-bold";
    FileAnnotationFilled => "fileAnnotationFilled", "\u{f3f4}", "file-annotation-filled";
    FileAnnotationLight => "fileAnnotationLight", "\u{f3f5}", "file-annotation-light";
    FileAnnotationRegular => "fileAnnotationRegular", "\u{f3f6}", "file-annotation-regular";
    FileAudioBold => "fileAudioBold", "\u{f3f7}", "file-audio-bold";
    FileAudioFilled => "fileAudioFilled", "\u{f3f8}", "file-audio-filled";
    FileAudioLight => "fileAudioLight", "\u{f3f9}", "file-audio-light";
    FileAudioRegular => "fileAudioRegular", "\u{f3fa}", "file-audio-regular";
    FileBugBold => "fileBugBold", "\u{f3fb}", "file-bug-bold";
    FileBugFilled => "fileBugFilled", "\u{f3fc}", "file-bug-filled";
    FileBugLight => "fileBugLight", "\u{f3fd}", "file-bug-light";
    FileBugRegular => "fileBugRegular", "\u{f3fe}", "file-bug-regular";
    FileCodeBold => "fileCodeBold", "\u{f3ff}", "file-code-bold";
    FileCodeFilled => "fileCodeFilled", "\u{f400}", "file-code-filled";
    FileCodeLight => "fileCodeLight", "\u{f401}", "file-code-light";
    FileCodeRegular => "fileCodeRegular", "\u{f402}", "file-code-regular";
    FileDashboardBold => "fileDashboardBold", "\u{f403}", "file-dashboard-bold";
    FileDashboardFilled => "fileDashboardFilled", "\u{f404}", "file-dashboard-filled";
    FileDashboardLight => "fileDashboardLight", "\u{f405}", "file-dashboard-light";
    FileDashboardRegular => "fileDashboardRegular", "\u{f406}", "file-dashboard-regular";
    FileExcelBold => "fileExcelBold", "\u{f407}", "file-excel-bold";
    FileExcelFilled => "fileExcelFilled", "\u{f408}", "file-excel-filled";
    FileExcelLight => "fileExcelLight", "\u{f409}", "file-excel-light";
    FileExcelRegular => "fileExcelRegular", "\u{f40a}", "file-excel-regular";
    FileGraphBold => "fileGraphBold", "\u{f40b}", "file-graph-bold";
    FileGraphFilled => "fileGraphFilled", "\u{f40c}", "file-graph-filled";
    FileGraphLight => "fileGraphLight", "\u{f40d}", "file-graph-light";
    FileGraphRegular => "fileGraphRegular", "\u{f40e}", "file-graph-regular";
    FileImageBold => "fileImageBold", "\u{f40f}", "file-image-bold";
    FileImageFilled => "fileImageFilled", "\u{f410}", "file-image-filled";
    FileImageLight => "fileImageLight", "\u{f411}", "file-image-light";
    FileImageRegular => "fileImageRegular", "\u{f412}", "file-image-regular";
    FileKeynoteBold => "fileKeynoteBold", "\u{f413}", "file-keynote-bold";
    FileKeynoteFilled => "fileKeynoteFilled", "\u{f414}", "file-keynote-filled";
    FileKeynoteLight => "fileKeynoteLight", "\u{f415}", "file-keynote-light";
    FileKeynoteRegular => "fileKeynoteRegular", "\u{f416}", "file-keynote-regular";
    FileLockedBold => "fileLockedBold", "\u{f417}", "file-locked-bold";
    FileLockedFilled => "fileLockedFilled", "\u{f418}", "file-locked-filled";
    FileLockedLight => "fileLockedLight", "\u{f419}", "file-locked-light";
    FileLockedRegular => "fileLockedRegular", "\u{f41a}", "file-locked-regular";
    FileMissingBold => "fileMissingBold", "\u{f41b}", "file-missing-bold";
    FileMissingFilled => "fileMissingFilled", "\u{f41c}", "file-missing-filled";
    FileMissingLight => "fileMissingLight", "\u{f41d}", "file-missing-light";
    FileMissingRegular => "fileMissingRegular", "\u{f41e}", "file-missing-regular";
    FileMusicBold => "fileMusicBold", "\u{f41f}", "file-music-bold";
    FileMusicFilled => "fileMusicFilled", "\u{f420}", "file-music-filled";
    FileMusicLight => "fileMusicLight", "\u{f421}", "file-music-light";
    FileMusicRegular => "fileMusicRegular", "\u{f422}", "file-music-regular";
    FileOnenoteBold => "fileOnenoteBold", "\u{f423}", "file-onenote-bold";
    FileOnenoteFilled => "fileOnenoteFilled", "\u{f424}", "file-onenote-filled";
    FileOnenoteLight => "fileOnenoteLight", "\u{f425}", "file-onenote-light";
    FileOnenoteRegular => "fileOnenoteRegular", "\u{f426}", "file-onenote-regular";
    FilePdfBold => "filePdfBold", "\u{f427}", "file-pdf-bold";
    FilePdfFilled => "filePdfFilled", "\u{f428}", "file-pdf-filled";
    FilePdfLight => "filePdfLight", "\u{f429}", "file-pdf-light";
    FilePdfRegular => "filePdfRegular", "\u{f42a}", "file-pdf-regular";
    FilePowerpointBold => "filePowerpointBold", "\u{f42b}", "file-powerpoint-bold";
    FilePowerpointFilled => "filePowerpointFilled", "\u{f42c}", "file-powerpoint-filled";
    FilePowerpointLight => "filePowerpointLight", "\u{f42d}", "file-powerpoint-light";
    FilePowerpointRegular => "filePowerpointRegular", "\u{f42e}", "file-powerpoint-regular";
    FileSpreadsheetBold => "fileSpreadsheetBold", "\u{f42f}", "file-spreadsheet-bold";
    FileSpreadsheetFilled => "fileSpreadsheetFilled", "\u{f430}", "file-spreadsheet-filled";
    FileSpreadsheetLight => "fileSpreadsheetLight", "\u{f431}", "file-spreadsheet-light";
    FileSpreadsheetRegular => "fileSpreadsheetRegular", "\u{f432}", "file-spreadsheet-regular";
    FileTextBold => "fileTextBold", "\u{f433}", "file-text-bold";
    FileTextFilled => "fileTextFilled", "\u{f434}", "file-text-filled";
    FileTextLight => "fileTextLight", "\u{f435}", "file-text-light";
    FileTextRegular => "fileTextRegular", "\u{f436}", "file-text-regular";
    FileVectorBold => "fileVectorBold", "\u{f437}", "file-vector-bold";
    FileVectorFilled => "fileVectorFilled", "\u{f438}", "file-vector-filled";
    FileVectorLight => "fileVectorLight", "\u{f439}", "file-vector-light";
    FileVectorRegular => "fileVectorRegular", "\u{f43a}", "file-vector-regular";
    FileVideoBold => "fileVideoBold", "\u{f43b}", "file-video-bold";
    FileVideoFilled => "fileVideoFilled", "\u{f43c}", "file-video-filled";
    FileVideoLight => "fileVideoLight", "\u{f43d}", "file-video-light";
    FileVideoRegular => "fileVideoRegular", "\u{f43e}", "file-video-regular";
    FileWordBold => "fileWordBold", "\u{f43f}", "file-word-bold";
    FileWordFilled => "fileWordFilled", "\u{f440}", "file-word-filled";
    FileWordLight => "fileWordLight", "\u{f441}", "file-word-light";
    FileWordRegular => "fileWordRegular", "\u{f442}", "file-word-regular";
    FileZipBold => "fileZipBold", "\u{f443}", "file-zip-bold";
    FileZipFilled => "fileZipFilled", "\u{f444}", "file-zip-filled";
    FileZipLight => "fileZipLight", "\u{f445}", "file-zip-light";
    FileZipRegular => "fileZipRegular", "\u{f446}", "file-zip-regular";
    FilesBold => "filesBold", "\u{f447}", "files-bold";
    FilesFilled => "filesFilled", "\u{f448}", "files-filled";
    FilesLight => "filesLight", "\u{f449}", "files-light";
    FilesRegular => "filesRegular", "\u{f44a}", "files-regular";
    FilterBold => "filterBold", "\u{f44b}", "filter-bold";
    FilterCircleBold => "filterCircleBold", "\u{f44c}", "filter-circle-bold";
    FilterCircleFilled => "filterCircleFilled", "\u{f44d}", "filter-circle-filled";
    FilterCircleLight => "filterCircleLight", "\u{f44e}", "filter-circle-light";
    FilterCircleRegular => "filterCircleRegular", "\u{f44f}", "filter-circle-regular";
    FilterLight => "filterLight", "\u{f450}", "filter-light";
    FilterRegular => "filterRegular", "\u{f451}", "filter-regular";
    FitToWidthBold => "fitToWidthBold", "\u{f452}", "fit-to-width-bold";
    FitToWidthLight => "fitToWidthLight", "\u{f453}", "fit-to-width-light";
    FitToWidthRegular => "fitToWidthRegular", "\u{f454}", "fit-to-width-regular";
    FitToWindowBold => "fitToWindowBold", "\u{f455}", "fit-to-window-bold";
    FitToWindowExitBold => "fitToWindowExitBold", "\u{f456}", "fit-to-window-exit-bold";
    FitToWindowExitLight => "fitToWindowExitLight", "\u{f457}", "fit-to-window-exit-light";
    FitToWindowExitRegular => "fitToWindowExitRegular", "\u{f458}", "fit-to-window-exit-regular";
    FitToWindowLight => "fitToWindowLight", "\u{f459}", "fit-to-window-light";
    FitToWindowRegular => "fitToWindowRegular", "\u{f45a}", "fit-to-window-regular";
    FlagBold => "flagBold", "\u{f45b}", "flag-bold";
    FlagCircleBold => "flagCircleBold", "\u{f45c}", "flag-circle-bold";
    FlagCircleFilled => "flagCircleFilled", "\u{f45d}", "flag-circle-filled";
    FlagCircleLight => "flagCircleLight", "\u{f45e}", "flag-circle-light";
    FlagCircleRegular => "flagCircleRegular", "\u{f45f}", "flag-circle-regular";
    FlagFilled => "flagFilled", "\u{f460}", "flag-filled";
    FlagLight => "flagLight", "\u{f461}", "flag-light";
    FlagRegular => "flagRegular", "\u{f462}", "flag-regular";
    FolderBold => "folderBold", "\u{f463}", "folder-bold";
    FolderEditBold => "folderEditBold", "\u{f464}", "folder-edit-bold";
    FolderEditLight => "folderEditLight", "\u{f465}", "folder-edit-light";
    FolderEditRegular => "folderEditRegular", "\u{f466}", "folder-edit-regular";
    FolderLight => "folderLight", "\u{f467}", "folder-light";
    FolderLockBold => "folderLockBold", "\u{f468}", "folder-lock-bold";
    FolderLockLight => "folderLockLight", "\u{f469}", "folder-lock-light";
    FolderLockRegular => "folderLockRegular", "\u{f46a}", "folder-lock-regular";
    FolderRegular => "folderRegular", "\u{f46b}", "folder-regular";
    FolderViewBold => "folderViewBold", "\u{f46c}", "folder-view-bold";
    FolderViewLight => "folderViewLight", "\u{f46d}", "folder-view-light";
    FolderViewRegular => "folderViewRegular", "\u{f46e}", "folder-view-regular";
    FoodBold => "foodBold", "\u{f46f}", "food-bold";
    FoodLight => "foodLight", "\u{f470}", "food-light";
    FoodRegular => "foodRegular", "\u{f471}", "food-regular";
    FormatBold => "formatBold", "\u{f472}", "format-bold";
    FormatControlPanelDraggerBold => "formatControlPanelDraggerBold", "\u{f473}", "format-control-panel-dragger-bold";
    FormatControlPanelDraggerHorizontalBold => "formatControlPanelDraggerHorizontalBold", "\u{f474}", "format-control-panel-dragger-horizontal-bold";
    FormatControlPanelDraggerHorizontalLight => "formatControlPanelDraggerHorizontalLight", "\u{f475}", "format-control-panel-dragger-horizontal-light";
    FormatControlPanelDraggerHorizontalRegular => "formatControlPanelDraggerHorizontalRegular", "\u{f476}", "format-control-panel-dragger-horizontal-regular";
    FormatControlPanelDraggerLight => "formatControlPanelDraggerLight", "\u{f477}", "format-control-panel-dragger-light";
    FormatControlPanelDraggerRegular => "formatControlPanelDraggerRegular", "\u{f478}", "format-control-panel-dragger-regular";
    FormatDefaultAppBold => "formatDefaultAppBold", "\u{f479}", "format-default-app-bold";
    FormatDefaultAppLight => "formatDefaultAppLight", "\u{f47a}", "format-default-app-light";
    FormatDefaultAppRegular => "formatDefaultAppRegular", "\u{f47b}", "format-default-app-regular";
    FormatLight => "formatLight", "\u{f47c}", "format-light";
    FormatPanelControlBarBold => "formatPanelControlBarBold", "\u{f47d}", "format-panel-control-bar-bold";
    FormatPanelControlBarLight => "formatPanelControlBarLight", "\u{f47e}", "format-panel-control-bar-light";
    FormatPanelControlBarRegular => "formatPanelControlBarRegular", "\u{f47f}", "format-panel-control-bar-regular";
    FormatPanelControlDownBold => "formatPanelControlDownBold", "\u{f480}", "format-panel-control-down-bold";
    FormatPanelControlDownLight => "formatPanelControlDownLight", "\u{f481}", "format-panel-control-down-light";
    FormatPanelControlDownRegular => "formatPanelControlDownRegular", "\u{f482}", "format-panel-control-down-regular";
    FormatPanelControlLeftBold => "formatPanelControlLeftBold", "\u{f483}", "format-panel-control-left-bold";
    FormatPanelControlLeftLight => "formatPanelControlLeftLight", "\u{f484}", "format-panel-control-left-light";
    FormatPanelControlLeftRegular => "formatPanelControlLeftRegular", "\u{f485}", "format-panel-control-left-regular";
    FormatPanelControlRightBold => "formatPanelControlRightBold", "\u{f486}", "format-panel-control-right-bold";
    FormatPanelControlRightLight => "formatPanelControlRightLight", "\u{f487}", "format-panel-control-right-light";
    FormatPanelControlRightRegular => "formatPanelControlRightRegular", "\u{f488}", "format-panel-control-right-regular";
    FormatPanelControlUpBold => "formatPanelControlUpBold", "\u{f489}", "format-panel-control-up-bold";
    FormatPanelControlUpDownBold => "formatPanelControlUpDownBold", "\u{f48a}", "format-panel-control-up-down-bold";
    FormatPanelControlUpDownLight => "formatPanelControlUpDownLight", "\u{f48b}", "format-panel-control-up-down-light";
    FormatPanelControlUpDownRegular => "formatPanelControlUpDownRegular", "\u{f48c}", "format-panel-control-up-down-regular";
    FormatPanelControlUpLight => "formatPanelControlUpLight", "\u{f48d}", "format-panel-control-up-light";
    FormatPanelControlUpRegular => "formatPanelControlUpRegular", "\u{f48e}", "format-panel-control-up-regular";
    FormatRegular => "formatRegular", "\u{f48f}", "format-regular";
    FormatViewMixedBold => "formatViewMixedBold", "\u{f490}", "format-view-mixed-bold";
    FormatViewMixedLight => "formatViewMixedLight", "\u{f491}", "format-view-mixed-light";
    FormatViewMixedRegular => "formatViewMixedRegular", "\u{f492}", "format-view-mixed-regular";
    ForwardMessageBold => "forwardMessageBold", "\u{f493}", "forward-message-bold";
    ForwardMessageFilled => "forwardMessageFilled", "\u{f494}", "forward-message-filled";
    ForwardMessageLight => "forwardMessageLight", "\u{f495}", "forward-message-light";
    ForwardMessageRegular => "forwardMessageRegular", "\u{f496}", "forward-message-regular";
    FourWayNavigationBold => "fourWayNavigationBold", "\u{f497}", "four-way-navigation-bold";
    FourWayNavigationLight => "fourWayNavigationLight", "\u{f498}", "four-way-navigation-light";
    FourWayNavigationRegular => "fourWayNavigationRegular", "\u{f499}", "four-way-navigation-regular";
    FullscreenBold => "fullscreenBold", "\u{f49a}", "fullscreen-bold";
    FullscreenExitBold => "fullscreenExitBold", "\u{f49b}", "fullscreen-exit-bold";
    FullscreenExitLight => "fullscreenExitLight", "\u{f49c}", "fullscreen-exit-light";
    FullscreenExitRegular => "fullscreenExitRegular", "\u{f49d}", "fullscreen-exit-regular";
    FullscreenLight => "fullscreenLight", "\u{f49e}", "fullscreen-light";
    FullscreenRegular => "fullscreenRegular", "\u{f49f}", "fullscreen-regular";
    GenericDeviceVideoBold => "genericDeviceVideoBold", "\u{f4a0}", "generic-device-video-bold";
    GenericDeviceVideoFilled => "genericDeviceVideoFilled", "\u{f4a1}", "generic-device-video-filled";
    GenericDeviceVideoLight => "genericDeviceVideoLight", "\u{f4a2}", "generic-device-video-light";
    GenericDeviceVideoRegular => "genericDeviceVideoRegular", "\u{f4a3}", "generic-device-video-regular";
    GenericDeviceVideoSmallFilled => "genericDeviceVideoSmallFilled", "\u{f4a4}", "generic-device-video-small-filled";
    GifBold => "gifBold", "\u{f4a5}", "gif-bold";
    GifFilled => "gifFilled", "\u{f4a6}", "gif-filled";
    GifLight => "gifLight", "\u{f4a7}", "gif-light";
    GifRegular => "gifRegular", "\u{f4a8}", "gif-regular";
    GuestIssuerBold => "guestIssuerBold", "\u{f4a9}", "guest-issuer-bold";
    GuestIssuerLight => "guestIssuerLight", "\u{f4aa}", "guest-issuer-light";
    GuestIssuerRegular => "guestIssuerRegular", "\u{f4ab}", "guest-issuer-regular";
    GuideBold => "guideBold", "\u{f4ac}", "guide-bold";
    GuideLight => "guideLight", "\u{f4ad}", "guide-light";
    GuideRegular => "guideRegular", "\u{f4ae}", "guide-regular";
    HandlerBold => "handlerBold", "\u{f4af}", "handler-bold";
    HandlerLight => "handlerLight", "\u{f4b0}", "handler-light";
    HandlerRegular => "handlerRegular", "\u{f4b1}", "handler-regular";
    HandsetAlertBold => "handsetAlertBold", "\u{f4b2}", "handset-alert-bold";
    HandsetAlertFilled => "handsetAlertFilled", "\u{f4b3}", "handset-alert-filled";
    HandsetAlertLight => "handsetAlertLight", "\u{f4b4}", "handset-alert-light";
    HandsetAlertRegular => "handsetAlertRegular", "\u{f4b5}", "handset-alert-regular";
    HandsetBold => "handsetBold", "\u{f4b6}", "handset-bold";
    HandsetFilled => "handsetFilled", "\u{f4b7}", "handset-filled";
    HandsetLight => "handsetLight", "\u{f4b8}", "handset-light";
    HandsetMutedBold => "handsetMutedBold", "\u{f4b9}", "handset-muted-bold";
    HandsetMutedFilled => "handsetMutedFilled", "\u{f4ba}", "handset-muted-filled";
    HandsetMutedLight => "handsetMutedLight", "\u{f4bb}", "handset-muted-light";
    HandsetMutedRegular => "handsetMutedRegular", "\u{f4bc}", "handset-muted-regular";
    HandsetRegular => "handsetRegular", "\u{f4bd}", "handset-regular";
    HandshakeBold => "handshakeBold", "\u{f4be}", "handshake-bold";
    HandshakeLight => "handshakeLight", "\u{f4bf}", "handshake-light";
    HandshakeRegular => "handshakeRegular", "\u{f4c0}", "handshake-regular";
    HeadingOneBold => "headingOneBold", "\u{f4c1}", "heading-one-bold";
    HeadingOneLight => "headingOneLight", "\u{f4c2}", "heading-one-light";
    HeadingOneRegular => "headingOneRegular", "\u{f4c3}", "heading-one-regular";
    HeadingThreeBold => "headingThreeBold", "\u{f4c4}", "heading-three-bold";
    HeadingThreeLight => "headingThreeLight", "\u{f4c5}", "heading-three-light";
    HeadingThreeRegular => "headingThreeRegular", "\u{f4c6}", "heading-three-regular";
    HeadingTwoBold => "headingTwoBold", "\u{f4c7}", "heading-two-bold";
    HeadingTwoLight => "headingTwoLight", "\u{f4c8}", "heading-two-light";
    HeadingTwoRegular => "headingTwoRegular", "\u{f4c9}", "heading-two-regular";
    HeadsetAlertBold => "headsetAlertBold", "\u{f4ca}", "headset-alert-bold";
    HeadsetAlertLight => "headsetAlertLight", "\u{f4cb}", "headset-alert-light";
    HeadsetAlertRegular => "headsetAlertRegular", "\u{f4cc}", "headset-alert-regular";
    HeadsetBold => "headsetBold", "\u{f4cd}", "headset-bold";
    HeadsetFilled => "headsetFilled", "\u{f4ce}", "headset-filled";
    HeadsetLight => "headsetLight", "\u{f4cf}", "headset-light";
    HeadsetMutedBold => "headsetMutedBold", "\u{f4d0}", "headset-muted-bold";
    HeadsetMutedLight => "headsetMutedLight", "\u{f4d1}", "headset-muted-light";
    HeadsetMutedRegular => "headsetMutedRegular", "\u{f4d2}", "headset-muted-regular";
    HeadsetPrivateBold => "headsetPrivateBold", "\u{f4d3}", "headset-private-bold";
    HeadsetPrivateLight => "headsetPrivateLight", "\u{f4d4}", "headset-private-light";
    HeadsetPrivateRegular => "headsetPrivateRegular", "\u{f4d5}", "headset-private-regular";
    HeadsetRegular => "headsetRegular", "\u{f4d6}", "headset-regular";
    HelpBold => "helpBold", "\u{f4d7}", "help-bold";
    HelpCircleActiveFilled => "helpCircleActiveFilled", "\u{f4d8}", "help-circle-active-filled";
    HelpCircleBold => "helpCircleBold", "\u{f4d9}", "help-circle-bold";
    HelpCircleLight => "helpCircleLight", "\u{f4da}", "help-circle-light";
    HelpCircleRegular => "helpCircleRegular", "\u{f4db}", "help-circle-regular";
    HelpLight => "helpLight", "\u{f4dc}", "help-light";
    HelpRegular => "helpRegular", "\u{f4dd}", "help-regular";
    HelpdeskBold => "helpdeskBold", "\u{f4de}", "helpdesk-bold";
    HelpdeskLight => "helpdeskLight", "\u{f4df}", "helpdesk-light";
    HelpdeskRegular => "helpdeskRegular", "\u{f4e0}", "helpdesk-regular";
    HideBold => "hideBold", "\u{f4e1}", "hide-bold";
    HideFilled => "hideFilled", "\u{f4e2}", "hide-filled";
    HideLight => "hideLight", "\u{f4e3}", "hide-light";
    HideRegular => "hideRegular", "\u{f4e4}", "hide-regular";
    HomeBold => "homeBold", "\u{f4e5}", "home-bold";
    HomeFilled => "homeFilled", "\u{f4e6}", "home-filled";
    HomeLight => "homeLight", "\u{f4e7}", "home-light";
    HomeRegular => "homeRegular", "\u{f4e8}", "home-regular";
    HorizontalLineBold => "horizontalLineBold", "\u{f4e9}", "horizontal-line-bold";
    HorizontalLineLight => "horizontalLineLight", "\u{f4ea}", "horizontal-line-light";
    HorizontalLineRegular => "horizontalLineRegular", "\u{f4eb}", "horizontal-line-regular";
    HumidityBold => "humidityBold", "\u{f4ec}", "humidity-bold";
    HumidityLight => "humidityLight", "\u{f4ed}", "humidity-light";
    HumidityRegular => "humidityRegular", "\u{f4ee}", "humidity-regular";
    HuntGroupBold => "huntGroupBold", "\u{f4ef}", "hunt-group-bold";
    HuntGroupFilled => "huntGroupFilled", "\u{f4f0}", "hunt-group-filled";
    HuntGroupLight => "huntGroupLight", "\u{f4f1}", "hunt-group-light";
    HuntGroupRegular => "huntGroupRegular", "\u{f4f2}", "hunt-group-regular";
    ImportBold => "importBold", "\u{f4f3}", "import-bold";
    ImportLight => "importLight", "\u{f4f4}", "import-light";
    ImportRegular => "importRegular", "\u{f4f5}", "import-regular";
    IncomingCallLegacyBold => "incomingCallLegacyBold", "\u{f4f6}", "incoming-call-legacy-bold";
    IncomingCallLegacyLight => "incomingCallLegacyLight", "\u{f4f7}", "incoming-call-legacy-light";
    IncomingCallLegacyRegular => "incomingCallLegacyRegular", "\u{f4f8}", "incoming-call-legacy-regular";
    InfoBadgeFilled => "infoBadgeFilled", "\u{f4f9}", "info-badge-filled";
    InfoCircleBold => "infoCircleBold", "\u{f4fa}", "info-circle-bold";
    InfoCircleFilled => "infoCircleFilled", "\u{f4fb}", "info-circle-filled";
    InfoCircleLight => "infoCircleLight", "\u{f4fc}", "info-circle-light";
    InfoCircleRegular => "infoCircleRegular", "\u{f4fd}", "info-circle-regular";
    InfoCircleTwoBold => "infoCircleTwoBold", "\u{f4fe}", "info-circle-two-bold";
    InfoCircleTwoFilled => "infoCircleTwoFilled", "\u{f4ff}", "info-circle-two-filled";
    InfoCircleTwoLight => "infoCircleTwoLight", "\u{f500}", "info-circle-two-light";
    InfoCircleTwoRegular => "infoCircleTwoRegular", "\u{f501}", "info-circle-two-regular";
    InputBold => "inputBold", "\u{f502}", "input-bold";
    InputDisconnectedBold => "inputDisconnectedBold", "\u{f503}", "input-disconnected-bold";
    InputDisconnectedLight => "inputDisconnectedLight", "\u{f504}", "input-disconnected-light";
    InputDisconnectedRegular => "inputDisconnectedRegular", "\u{f505}", "input-disconnected-regular";
    InputLight => "inputLight", "\u{f506}", "input-light";
    InputRegular => "inputRegular", "\u{f507}", "input-regular";
    InsightsBold => "insightsBold", "\u{f508}", "insights-bold";
    InsightsLight => "insightsLight", "\u{f509}", "insights-light";
    InsightsRegular => "insightsRegular", "\u{f50a}", "insights-regular";
    IntegrationsBold => "integrationsBold", "\u{f50b}", "integrations-bold";
    IntegrationsLight => "integrationsLight", "\u{f50c}", "integrations-light";
    IntegrationsRegular => "integrationsRegular", "\u{f50d}", "integrations-regular";
    InvitedUserBold => "invitedUserBold", "\u{f50e}", "invited-user-bold";
    InvitedUserLight => "invitedUserLight", "\u{f50f}", "invited-user-light";
    InvitedUserRegular => "invitedUserRegular", "\u{f510}", "invited-user-regular";
    ItalicBold => "italicBold", "\u{f511}", "italic-bold";
    ItalicLight => "italicLight", "\u{f512}", "italic-light";
    ItalicRegular => "italicRegular", "\u{f513}", "italic-regular";
    JoinAudioBold => "joinAudioBold", "\u{f514}", "join-audio-bold";
    JoinAudioFilled => "joinAudioFilled", "\u{f515}", "join-audio-filled";
    JoinAudioLight => "joinAudioLight", "\u{f516}", "join-audio-light";
    JoinAudioRegular => "joinAudioRegular", "\u{f517}", "join-audio-regular";
    KeyboardBold => "keyboardBold", "\u{f518}", "keyboard-bold";
    KeyboardCloseBold => "keyboardCloseBold", "\u{f519}", "keyboard-close-bold";
    KeyboardCloseLight => "keyboardCloseLight", "\u{f51a}", "keyboard-close-light";
    KeyboardCloseRegular => "keyboardCloseRegular", "\u{f51b}", "keyboard-close-regular";
    KeyboardLight => "keyboardLight", "\u{f51c}", "keyboard-light";
    KeyboardRegular => "keyboardRegular", "\u{f51d}", "keyboard-regular";
    LanguageBold => "languageBold", "\u{f51e}", "language-bold";
    LanguageLight => "languageLight", "\u{f51f}", "language-light";
    LanguageRegular => "languageRegular", "\u{f520}", "language-regular";
    LaptopBold => "laptopBold", "\u{f521}", "laptop-bold";
    LaptopDisconnectedBold => "laptopDisconnectedBold", "\u{f522}", "laptop-disconnected-bold";
    LaptopDisconnectedLight => "laptopDisconnectedLight", "\u{f523}", "laptop-disconnected-light";
    LaptopDisconnectedRegular => "laptopDisconnectedRegular", "\u{f524}", "laptop-disconnected-regular";
    LaptopFilled => "laptopFilled", "\u{f525}", "laptop-filled";
    LaptopLight => "laptopLight", "\u{f526}", "laptop-light";
    LaptopRegular => "laptopRegular", "\u{f527}", "laptop-regular";
    LaserPointerBold => "laserPointerBold", "\u{f528}", "laser-pointer-bold";
    LaserPointerLight => "laserPointerLight", "\u{f529}", "laser-pointer-light";
    LaserPointerRegular => "laserPointerRegular", "\u{f52a}", "laser-pointer-regular";
    LaunchBold => "launchBold", "\u{f52b}", "launch-bold";
    LaunchLight => "launchLight", "\u{f52c}", "launch-light";
    LaunchRegular => "launchRegular", "\u{f52d}", "launch-regular";
    LayoutSideBySideVerticalBold => "layoutSideBySideVerticalBold", "\u{f52e}", "layout-side-by-side-vertical-bold";
    LayoutSideBySideVerticalFilled => "layoutSideBySideVerticalFilled", "\u{f52f}", "layout-side-by-side-vertical-filled";
    LayoutSideBySideVerticalLight => "layoutSideBySideVerticalLight", "\u{f530}", "layout-side-by-side-vertical-light";
    LayoutSideBySideVerticalRegular => "layoutSideBySideVerticalRegular", "\u{f531}", "layout-side-by-side-vertical-regular";
    LeaveBreakoutSessionBold => "leaveBreakoutSessionBold", "\u{f532}", "leave-breakout-session-bold";
    LeaveBreakoutSessionLight => "leaveBreakoutSessionLight", "\u{f533}", "leave-breakout-session-light";
    LeaveBreakoutSessionRegular => "leaveBreakoutSessionRegular", "\u{f534}", "leave-breakout-session-regular";
    LeaveDeviceBold => "leaveDeviceBold", "\u{f535}", "leave-device-bold";
    LeaveDeviceLight => "leaveDeviceLight", "\u{f536}", "leave-device-light";
    LeaveDeviceRegular => "leaveDeviceRegular", "\u{f537}", "leave-device-regular";
    LikeBold => "likeBold", "\u{f538}", "like-bold";
    LikeFilled => "likeFilled", "\u{f539}", "like-filled";
    LikeLight => "likeLight", "\u{f53a}", "like-light";
    LikeRegular => "likeRegular", "\u{f53b}", "like-regular";
    LinkBold => "linkBold", "\u{f53c}", "link-bold";
    LinkLight => "linkLight", "\u{f53d}", "link-light";
    LinkRegular => "linkRegular", "\u{f53e}", "link-regular";
    ListBulletedBold => "listBulletedBold", "\u{f53f}", "list-bulleted-bold";
    ListBulletedLight => "listBulletedLight", "\u{f540}", "list-bulleted-light";
    ListBulletedRegular => "listBulletedRegular", "\u{f541}", "list-bulleted-regular";
    ListMenuBold => "listMenuBold", "\u{f542}", "list-menu-bold";
    ListMenuLight => "listMenuLight", "\u{f543}", "list-menu-light";
    ListMenuRegular => "listMenuRegular", "\u{f544}", "list-menu-regular";
    ListNumberedBold => "listNumberedBold", "\u{f545}", "list-numbered-bold";
    ListNumberedLight => "listNumberedLight", "\u{f546}", "list-numbered-light";
    ListNumberedRegular => "listNumberedRegular", "\u{f547}", "list-numbered-regular";
    LocationBold => "locationBold", "\u{f548}", "location-bold";
    LocationFilled => "locationFilled", "\u{f549}", "location-filled";
    LocationLight => "locationLight", "\u{f54a}", "location-light";
    LocationRegular => "locationRegular", "\u{f54b}", "location-regular";
    LowerHandBold => "lowerHandBold", "\u{f54c}", "lower-hand-bold";
    LowerHandLight => "lowerHandLight", "\u{f54d}", "lower-hand-light";
    LowerHandRegular => "lowerHandRegular", "\u{f54e}", "lower-hand-regular";
    MarkAsUnreadBold => "markAsUnreadBold", "\u{f54f}", "mark-as-unread-bold";
    MarkAsUnreadLight => "markAsUnreadLight", "\u{f550}", "mark-as-unread-light";
    MarkAsUnreadRegular => "markAsUnreadRegular", "\u{f551}", "mark-as-unread-regular";
    MarkdownBold => "markdownBold", "\u{f552}", "markdown-bold";
    MarkdownLight => "markdownLight", "\u{f553}", "markdown-light";
    MarkdownRegular => "markdownRegular", "\u{f554}", "markdown-regular";
    MarkerBold => "markerBold", "\u{f555}", "marker-bold";
    MarkerFilled => "markerFilled", "\u{f556}", "marker-filled";
    MarkerLight => "markerLight", "\u{f557}", "marker-light";
    MarkerRegular => "markerRegular", "\u{f558}", "marker-regular";
    MaximizeBold => "maximizeBold", "\u{f559}", "maximize-bold";
    MaximizeLight => "maximizeLight", "\u{f55a}", "maximize-light";
    MaximizeRegular => "maximizeRegular", "\u{f55b}", "maximize-regular";
    MediaPlayerBold => "mediaPlayerBold", "\u{f55c}", "media-player-bold";
    MediaPlayerLight => "mediaPlayerLight", "\u{f55d}", "media-player-light";
    MediaPlayerRegular => "mediaPlayerRegular", "\u{f55e}", "media-player-regular";
    MediaQualityGoodBold => "mediaQualityGoodBold", "\u{f55f}", "media-quality-good-bold";
    MediaQualityGoodFilled => "mediaQualityGoodFilled", "\u{f560}", "media-quality-good-filled";
    MediaQualityGoodLight => "mediaQualityGoodLight", "\u{f561}", "media-quality-good-light";
    MediaQualityGoodRegular => "mediaQualityGoodRegular", "\u{f562}", "media-quality-good-regular";
    MediaQualityPoorBold => "mediaQualityPoorBold", "\u{f563}", "media-quality-poor-bold";
    MediaQualityPoorFilled => "mediaQualityPoorFilled", "\u{f564}", "media-quality-poor-filled";
    MediaQualityPoorLight => "mediaQualityPoorLight", "\u{f565}", "media-quality-poor-light";
    MediaQualityPoorRegular => "mediaQualityPoorRegular", "\u{f566}", "media-quality-poor-regular";
    MediaQualityUnstableBold => "mediaQualityUnstableBold", "\u{f567}", "media-quality-unstable-bold";
    MediaQualityUnstableFilled => "mediaQualityUnstableFilled", "\u{f568}", "media-quality-unstable-filled";
    MediaQualityUnstableLight => "mediaQualityUnstableLight", "\u{f569}", "media-quality-unstable-light";
    MediaQualityUnstableRegular => "mediaQualityUnstableRegular", "\u{f56a}", "media-quality-unstable-regular";
    MeetBold => "meetBold", "\u{f56b}", "meet-bold";
    MeetEndBold => "meetEndBold", "\u{f56c}", "meet-end-bold";
    MeetEndLight => "meetEndLight", "\u{f56d}", "meet-end-light";
    MeetEndRegular => "meetEndRegular", "\u{f56e}", "meet-end-regular";
    MeetFilled => "meetFilled", "\u{f56f}", "meet-filled";
    MeetLight => "meetLight", "\u{f570}", "meet-light";
    MeetRegular => "meetRegular", "\u{f571}", "meet-regular";
    MeetingsBold => "meetingsBold", "\u{f572}", "meetings-bold";
    MeetingsFilled => "meetingsFilled", "\u{f573}", "meetings-filled";
    MeetingsFocusMonthBold => "meetingsFocusMonthBold", "\u{f574}", "meetings-focus-month-bold";
    MeetingsFocusMonthLight => "meetingsFocusMonthLight", "\u{f575}", "meetings-focus-month-light";
    MeetingsFocusMonthRegular => "meetingsFocusMonthRegular", "\u{f576}", "meetings-focus-month-regular";
    MeetingsFocusOneDayBold => "meetingsFocusOneDayBold", "\u{f577}", "meetings-focus-one-day-bold";
    MeetingsFocusOneDayLight => "meetingsFocusOneDayLight", "\u{f578}", "meetings-focus-one-day-light";
    MeetingsFocusOneDayRegular => "meetingsFocusOneDayRegular", "\u{f579}", "meetings-focus-one-day-regular";
    MeetingsFocusThreeDayBold => "meetingsFocusThreeDayBold", "\u{f57a}", "meetings-focus-three-day-bold";
    MeetingsFocusThreeDayLight => "meetingsFocusThreeDayLight", "\u{f57b}", "meetings-focus-three-day-light";
    MeetingsFocusThreeDayRegular => "meetingsFocusThreeDayRegular", "\u{f57c}", "meetings-focus-three-day-regular";
    MeetingsFocusUpcomingBold => "meetingsFocusUpcomingBold", "\u{f57d}", "meetings-focus-upcoming-bold";
    MeetingsFocusUpcomingLight => "meetingsFocusUpcomingLight", "\u{f57e}", "meetings-focus-upcoming-light";
    MeetingsFocusUpcomingRegular => "meetingsFocusUpcomingRegular", "\u{f57f}", "meetings-focus-upcoming-regular";
    MeetingsFocusWeekBold => "meetingsFocusWeekBold", "\u{f580}", "meetings-focus-week-bold";
    MeetingsFocusWeekLight => "meetingsFocusWeekLight", "\u{f581}", "meetings-focus-week-light";
    MeetingsFocusWeekRegular => "meetingsFocusWeekRegular", "\u{f582}", "meetings-focus-week-regular";
    MeetingsLight => "meetingsLight", "\u{f583}", "meetings-light";
    MeetingsPresenceBold => "meetingsPresenceBold", "\u{f584}", "meetings-presence-bold";
    MeetingsPresenceFilled => "meetingsPresenceFilled", "\u{f585}", "meetings-presence-filled";
    MeetingsPresenceLight => "meetingsPresenceLight", "\u{f586}", "meetings-presence-light";
    MeetingsPresenceRegular => "meetingsPresenceRegular", "\u{f587}", "meetings-presence-regular";
    MeetingsPresenceSmallFilled => "meetingsPresenceSmallFilled", "\u{f588}", "meetings-presence-small-filled";
    MeetingsRegular => "meetingsRegular", "\u{f589}", "meetings-regular";
    MeetingsTeamActiveBold => "meetingsTeamActiveBold", "\u{f58a}", "meetings-team-active-bold";
    MeetingsTeamActiveLight => "meetingsTeamActiveLight", "\u{f58b}", "meetings-team-active-light";
    MeetingsTeamActiveRegular => "meetingsTeamActiveRegular", "\u{f58c}", "meetings-team-active-regular";
    MeetingsTeamBold => "meetingsTeamBold", "\u{f58d}", "meetings-team-bold";
    MeetingsTeamLight => "meetingsTeamLight", "\u{f58e}", "meetings-team-light";
    MeetingsTeamNewBold => "meetingsTeamNewBold", "\u{f58f}", "meetings-team-new-bold";
    MeetingsTeamNewLight => "meetingsTeamNewLight", "\u{f590}", "meetings-team-new-light";
    MeetingsTeamNewRegular => "meetingsTeamNewRegular", "\u{f591}", "meetings-team-new-regular";
    MeetingsTeamRegular => "meetingsTeamRegular", "\u{f592}", "meetings-team-regular";
    MentionBold => "mentionBold", "\u{f593}", "mention-bold";
    MentionLight => "mentionLight", "\u{f594}", "mention-light";
    MentionRegular => "mentionRegular", "\u{f595}", "mention-regular";
    MicrophoneBold => "microphoneBold", "\u{f596}", "microphone-bold";
    MicrophoneFilled => "microphoneFilled", "\u{f597}", "microphone-filled";
    MicrophoneHardMutedBold => "microphoneHardMutedBold", "\u{f598}", "microphone-hard-muted-bold";
    MicrophoneHardMutedColoredBold => "microphoneHardMutedColoredBold", "\u{f599}", "microphone-hard-muted-colored-bold";
    MicrophoneHardMutedColoredLight => "microphoneHardMutedColoredLight", "\u{f59a}", "microphone-hard-muted-colored-light";
    MicrophoneHardMutedColoredRegular => "microphoneHardMutedColoredRegular", "\u{f59b}", "microphone-hard-muted-colored-regular";
    MicrophoneHardMutedLight => "microphoneHardMutedLight", "\u{f59c}", "microphone-hard-muted-light";
    MicrophoneHardMutedRegular => "microphoneHardMutedRegular", "\u{f59d}", "microphone-hard-muted-regular";
    MicrophoneLight => "microphoneLight", "\u{f59e}", "microphone-light";
    MicrophoneMusicModeColoredBold => "microphoneMusicModeColoredBold", "\u{f59f}", "microphone-music-mode-colored-bold";
    MicrophoneMusicModeColoredLight => "microphoneMusicModeColoredLight", "\u{f5a0}", "microphone-music-mode-colored-light";
    MicrophoneMusicModeColoredRegular => "microphoneMusicModeColoredRegular", "\u{f5a1}", "microphone-music-mode-colored-regular";
    MicrophoneMutedBold => "microphoneMutedBold", "\u{f5a2}", "microphone-muted-bold";
    MicrophoneMutedFilled => "microphoneMutedFilled", "\u{f5a3}", "microphone-muted-filled";
    MicrophoneMutedIndicatorFilled => "microphoneMutedIndicatorFilled", "\u{f5a4}", "microphone-muted-indicator-filled";
    MicrophoneMutedLight => "microphoneMutedLight", "\u{f5a5}", "microphone-muted-light";
    MicrophoneMutedRegular => "microphoneMutedRegular", "\u{f5a6}", "microphone-muted-regular";
    MicrophoneRegular => "microphoneRegular", "\u{f5a7}", "microphone-regular";
    MinimizeBold => "minimizeBold", "\u{f5a8}", "minimize-bold";
    MinimizeLight => "minimizeLight", "\u{f5a9}", "minimize-light";
    MinimizeRegular => "minimizeRegular", "\u{f5aa}", "minimize-regular";
    MinusBold => "minusBold", "\u{f5ab}", "minus-bold";
    MinusLight => "minusLight", "\u{f5ac}", "minus-light";
    MinusRegular => "minusRegular", "\u{f5ad}", "minus-regular";
    MirrorBold => "mirrorBold", "\u{f5ae}", "mirror-bold";
    MirrorFilled => "mirrorFilled", "\u{f5af}", "mirror-filled";
    MirrorLight => "mirrorLight", "\u{f5b0}", "mirror-light";
    MirrorRegular => "mirrorRegular", "\u{f5b1}", "mirror-regular";
    MonitoringBold => "monitoringBold", "\u{f5b2}", "monitoring-bold";
    MonitoringLight => "monitoringLight", "\u{f5b3}", "monitoring-light";
    MonitoringRegular => "monitoringRegular", "\u{f5b4}", "monitoring-regular";
    MoreAdrBold => "moreAdrBold", "\u{f5b5}", "more-adr-bold";
    MoreAdrLight => "moreAdrLight", "\u{f5b6}", "more-adr-light";
    MoreAdrRegular => "moreAdrRegular", "\u{f5b7}", "more-adr-regular";
    MoreBold => "moreBold", "\u{f5b8}", "more-bold";
    MoreCircleBold => "moreCircleBold", "\u{f5b9}", "more-circle-bold";
    MoreCircleFilled => "moreCircleFilled", "\u{f5ba}", "more-circle-filled";
    MoreCircleLight => "moreCircleLight", "\u{f5bb}", "more-circle-light";
    MoreCircleRegular => "moreCircleRegular", "\u{f5bc}", "more-circle-regular";
    MoreLight => "moreLight", "\u{f5bd}", "more-light";
    MoreRegular => "moreRegular", "\u{f5be}", "more-regular";
    MouseCursorBold => "mouseCursorBold", "\u{f5bf}", "mouse-cursor-bold";
    MouseCursorLight => "mouseCursorLight", "\u{f5c0}", "mouse-cursor-light";
    MouseCursorRegular => "mouseCursorRegular", "\u{f5c1}", "mouse-cursor-regular";
    MoveCallInAdrBold => "moveCallInAdrBold", "\u{f5c2}", "move-call-in-adr-bold";
    MoveCallInAdrLight => "moveCallInAdrLight", "\u{f5c3}", "move-call-in-adr-light";
    MoveCallInAdrRegular => "moveCallInAdrRegular", "\u{f5c4}", "move-call-in-adr-regular";
    MoveCallInIphBold => "moveCallInIphBold", "\u{f5c5}", "move-call-in-iph-bold";
    MoveCallInIphLight => "moveCallInIphLight", "\u{f5c6}", "move-call-in-iph-light";
    MoveCallInIphRegular => "moveCallInIphRegular", "\u{f5c7}", "move-call-in-iph-regular";
    MoveCallInLaptopBold => "moveCallInLaptopBold", "\u{f5c8}", "move-call-in-laptop-bold";
    MoveCallInLaptopLight => "moveCallInLaptopLight", "\u{f5c9}", "move-call-in-laptop-light";
    MoveCallInLaptopRegular => "moveCallInLaptopRegular", "\u{f5ca}", "move-call-in-laptop-regular";
    MoveCallInOutAdrBold => "moveCallInOutAdrBold", "\u{f5cb}", "move-call-in-out-adr-bold";
    MoveCallInOutAdrLight => "moveCallInOutAdrLight", "\u{f5cc}", "move-call-in-out-adr-light";
    MoveCallInOutAdrRegular => "moveCallInOutAdrRegular", "\u{f5cd}", "move-call-in-out-adr-regular";
    MoveCallInOutIphBold => "moveCallInOutIphBold", "\u{f5ce}", "move-call-in-out-iph-bold";
    MoveCallInOutIphLight => "moveCallInOutIphLight", "\u{f5cf}", "move-call-in-out-iph-light";
    MoveCallInOutIphRegular => "moveCallInOutIphRegular", "\u{f5d0}", "move-call-in-out-iph-regular";
    MoveCallInTabletBold => "moveCallInTabletBold", "\u{f5d1}", "move-call-in-tablet-bold";
    MoveCallInTabletLight => "moveCallInTabletLight", "\u{f5d2}", "move-call-in-tablet-light";
    MoveCallInTabletRegular => "moveCallInTabletRegular", "\u{f5d3}", "move-call-in-tablet-regular";
    MoveCallOutAdrBold => "moveCallOutAdrBold", "\u{f5d4}", "move-call-out-adr-bold";
    MoveCallOutAdrLight => "moveCallOutAdrLight", "\u{f5d5}", "move-call-out-adr-light";
    MoveCallOutAdrRegular => "moveCallOutAdrRegular", "\u{f5d6}", "move-call-out-adr-regular";
    MoveCallOutIphBold => "moveCallOutIphBold", "\u{f5d7}", "move-call-out-iph-bold";
    MoveCallOutIphLight => "moveCallOutIphLight", "\u{f5d8}", "move-call-out-iph-light";
    MoveCallOutIphRegular => "moveCallOutIphRegular", "\u{f5d9}", "move-call-out-iph-regular";
    MoveCallOutLaptopBold => "moveCallOutLaptopBold", "\u{f5da}", "move-call-out-laptop-bold";
    MoveCallOutLaptopLight => "moveCallOutLaptopLight", "\u{f5db}", "move-call-out-laptop-light";
    MoveCallOutLaptopRegular => "moveCallOutLaptopRegular", "\u{f5dc}", "move-call-out-laptop-regular";
    MoveCallOutTabletBold => "moveCallOutTabletBold", "\u{f5dd}", "move-call-out-tablet-bold";
    MoveCallOutTabletLight => "moveCallOutTabletLight", "\u{f5de}", "move-call-out-tablet-light";
    MoveCallOutTabletRegular => "moveCallOutTabletRegular", "\u{f5df}", "move-call-out-tablet-regular";
    MultilineChartBold => "multilineChartBold", "\u{f5e0}", "multiline-chart-bold";
    MultilineChartFilled => "multilineChartFilled", "\u{f5e1}", "multiline-chart-filled";
    MultilineChartLight => "multilineChartLight", "\u{f5e2}", "multiline-chart-light";
    MultilineChartRegular => "multilineChartRegular", "\u{f5e3}", "multiline-chart-regular";
    MultimediaBold => "multimediaBold", "\u{f5e4}", "multimedia-bold";
    MultimediaFilled => "multimediaFilled", "\u{f5e5}", "multimedia-filled";
    MultimediaLight => "multimediaLight", "\u{f5e6}", "multimedia-light";
    MultimediaRegular => "multimediaRegular", "\u{f5e7}", "multimedia-regular";
    MultipledDevicesBold => "multipledDevicesBold", "\u{f5e8}", "multipled-devices-bold";
    MultipledDevicesLight => "multipledDevicesLight", "\u{f5e9}", "multipled-devices-light";
    MultipledDevicesRegular => "multipledDevicesRegular", "\u{f5ea}", "multipled-devices-regular";
    MusicModeBold => "musicModeBold", "\u{f5eb}", "music-mode-bold";
    MusicModeCircleBold => "musicModeCircleBold", "\u{f5ec}", "music-mode-circle-bold";
    MusicModeCircleFilled => "musicModeCircleFilled", "\u{f5ed}", "music-mode-circle-filled";
    MusicModeCircleLight => "musicModeCircleLight", "\u{f5ee}", "music-mode-circle-light";
    MusicModeCircleRegular => "musicModeCircleRegular", "\u{f5ef}", "music-mode-circle-regular";
    MusicModeFilled => "musicModeFilled", "\u{f5f0}", "music-mode-filled";
    MusicModeLight => "musicModeLight", "\u{f5f1}", "music-mode-light";
    MusicModeRegular => "musicModeRegular", "\u{f5f2}", "music-mode-regular";
    MuteOnEntryBold => "muteOnEntryBold", "\u{f5f3}", "mute-on-entry-bold";
    MuteOnEntryFilled => "muteOnEntryFilled", "\u{f5f4}", "mute-on-entry-filled";
    MuteOnEntryLight => "muteOnEntryLight", "\u{f5f5}", "mute-on-entry-light";
    MuteOnEntryRegular => "muteOnEntryRegular", "\u{f5f6}", "mute-on-entry-regular";
    NewVoicemailBold => "newVoicemailBold", "\u{f5f7}", "new-voicemail-bold";
    NewVoicemailLight => "newVoicemailLight", "\u{f5f8}", "new-voicemail-light";
    NewVoicemailRegular => "newVoicemailRegular", "\u{f5f9}", "new-voicemail-regular";
    NewWhiteboardBold => "newWhiteboardBold", "\u{f5fa}", "new-whiteboard-bold";
    NewWhiteboardLight => "newWhiteboardLight", "\u{f5fb}", "new-whiteboard-light";
    NewWhiteboardRegular => "newWhiteboardRegular", "\u{f5fc}", "new-whiteboard-regular";
    NextBold => "nextBold", "\u{f5fd}", "next-bold";
    NextLight => "nextLight", "\u{f5fe}", "next-light";
    NextRegular => "nextRegular", "\u{f5ff}", "next-regular";
    NoDevicesBold => "noDevicesBold", "\u{f600}", "no-devices-bold";
    NoDevicesLight => "noDevicesLight", "\u{f601}", "no-devices-light";
    NoDevicesRegular => "noDevicesRegular", "\u{f602}", "no-devices-regular";
    NoiseRemovalBold => "noiseRemovalBold", "\u{f603}", "noise-removal-bold";
    NoiseRemovalLight => "noiseRemovalLight", "\u{f604}", "noise-removal-light";
    NoiseRemovalRegular => "noiseRemovalRegular", "\u{f605}", "noise-removal-regular";
    NoteBold => "noteBold", "\u{f606}", "note-bold";
    NoteLight => "noteLight", "\u{f607}", "note-light";
    NotePptBold => "notePptBold", "\u{f608}", "note-ppt-bold";
    NotePptLight => "notePptLight", "\u{f609}", "note-ppt-light";
    NotePptRegular => "notePptRegular", "\u{f60a}", "note-ppt-regular";
    NoteRegular => "noteRegular", "\u{f60b}", "note-regular";
    NotesBold => "notesBold", "\u{f60c}", "notes-bold";
    NotesLight => "notesLight", "\u{f60d}", "notes-light";
    NotesRegular => "notesRegular", "\u{f60e}", "notes-regular";
    NumberBold => "numberBold", "\u{f60f}", "number-bold";
    NumberLight => "numberLight", "\u{f610}", "number-light";
    NumberRegular => "numberRegular", "\u{f611}", "number-regular";
    OldRemoteBold => "oldRemoteBold", "\u{f612}", "old-remote-bold";
    OldRemoteLight => "oldRemoteLight", "\u{f613}", "old-remote-light";
    OldRemoteRegular => "oldRemoteRegular", "\u{f614}", "old-remote-regular";
    OldTouchBold => "oldTouchBold", "\u{f615}", "old-touch-bold";
    OldTouchLight => "oldTouchLight", "\u{f616}", "old-touch-light";
    OldTouchRegular => "oldTouchRegular", "\u{f617}", "old-touch-regular";
    OpenInFolderBold => "openInFolderBold", "\u{f618}", "open-in-folder-bold";
    OpenInFolderLight => "openInFolderLight", "\u{f619}", "open-in-folder-light";
    OpenInFolderRegular => "openInFolderRegular", "\u{f61a}", "open-in-folder-regular";
    OpenPagesBold => "openPagesBold", "\u{f61b}", "open-pages-bold";
    OpenPagesLight => "openPagesLight", "\u{f61c}", "open-pages-light";
    OpenPagesRegular => "openPagesRegular", "\u{f61d}", "open-pages-regular";
    OtherNumberBold => "otherNumberBold", "\u{f61e}", "other-number-bold";
    OtherNumberLight => "otherNumberLight", "\u{f61f}", "other-number-light";
    OtherNumberRegular => "otherNumberRegular", "\u{f620}", "other-number-regular";
    OtherNumberWarningBold => "otherNumberWarningBold", "\u{f621}", "other-number-warning-bold";
    OtherNumberWarningLight => "otherNumberWarningLight", "\u{f622}", "other-number-warning-light";
    OtherNumberWarningRegular => "otherNumberWarningRegular", "\u{f623}", "other-number-warning-regular";
    OutgoingCallLegacyBold => "outgoingCallLegacyBold", "\u{f624}", "outgoing-call-legacy-bold";
    OutgoingCallLegacyLight => "outgoingCallLegacyLight", "\u{f625}", "outgoing-call-legacy-light";
    OutgoingCallLegacyRegular => "outgoingCallLegacyRegular", "\u{f626}", "outgoing-call-legacy-regular";
    OverflowLeftBold => "overflowLeftBold", "\u{f627}", "overflow-left-bold";
    OverflowLeftLight => "overflowLeftLight", "\u{f628}", "overflow-left-light";
    OverflowLeftRegular => "overflowLeftRegular", "\u{f629}", "overflow-left-regular";
    OverflowRightBold => "overflowRightBold", "\u{f62a}", "overflow-right-bold";
    OverflowRightLight => "overflowRightLight", "\u{f62b}", "overflow-right-light";
    OverflowRightRegular => "overflowRightRegular", "\u{f62c}", "overflow-right-regular";
    PairedCameraBold => "pairedCameraBold", "\u{f62d}", "paired-camera-bold";
    PairedCameraLight => "pairedCameraLight", "\u{f62e}", "paired-camera-light";
    PairedCameraRegular => "pairedCameraRegular", "\u{f62f}", "paired-camera-regular";
    PairedDeviceBold => "pairedDeviceBold", "\u{f630}", "paired-device-bold";
    PairedDeviceLight => "pairedDeviceLight", "\u{f631}", "paired-device-light";
    PairedDeviceRegular => "pairedDeviceRegular", "\u{f632}", "paired-device-regular";
    PairedHandsetBold => "pairedHandsetBold", "\u{f633}", "paired-handset-bold";
    PairedHandsetLight => "pairedHandsetLight", "\u{f634}", "paired-handset-light";
    PairedHandsetRegular => "pairedHandsetRegular", "\u{f635}", "paired-handset-regular";
    PairingBold => "pairingBold", "\u{f636}", "pairing-bold";
    PairingLight => "pairingLight", "\u{f637}", "pairing-light";
    PairingRegular => "pairingRegular", "\u{f638}", "pairing-regular";
    ParkedBold => "parkedBold", "\u{f639}", "parked-bold";
    ParkedFilled => "parkedFilled", "\u{f63a}", "parked-filled";
    ParkedLight => "parkedLight", "\u{f63b}", "parked-light";
    ParkedRegular => "parkedRegular", "\u{f63c}", "parked-regular";
    ParseBold => "parseBold", "\u{f63d}", "parse-bold";
    ParseLight => "parseLight", "\u{f63e}", "parse-light";
    ParseRegular => "parseRegular", "\u{f63f}", "parse-regular";
    ParticipantAddBold => "participantAddBold", "\u{f640}", "participant-add-bold";
    ParticipantAddLight => "participantAddLight", "\u{f641}", "participant-add-light";
    ParticipantAddRegular => "participantAddRegular", "\u{f642}", "participant-add-regular";
    ParticipantBlockedBold => "participantBlockedBold", "\u{f643}", "participant-blocked-bold";
    ParticipantBlockedLight => "participantBlockedLight", "\u{f644}", "participant-blocked-light";
    ParticipantBlockedRegular => "participantBlockedRegular", "\u{f645}", "participant-blocked-regular";
    ParticipantBold => "participantBold", "\u{f646}", "participant-bold";
    ParticipantFilled => "participantFilled", "\u{f647}", "participant-filled";
    ParticipantLight => "participantLight", "\u{f648}", "participant-light";
    ParticipantListBold => "participantListBold", "\u{f649}", "participant-list-bold";
    ParticipantListFilled => "participantListFilled", "\u{f64a}", "participant-list-filled";
    ParticipantListLight => "participantListLight", "\u{f64b}", "participant-list-light";
    ParticipantListRegular => "participantListRegular", "\u{f64c}", "participant-list-regular";
    ParticipantRegular => "participantRegular", "\u{f64d}", "participant-regular";
    ParticipantRemoveBold => "participantRemoveBold", "\u{f64e}", "participant-remove-bold";
    ParticipantRemoveLight => "participantRemoveLight", "\u{f64f}", "participant-remove-light";
    ParticipantRemoveRegular => "participantRemoveRegular", "\u{f650}", "participant-remove-regular";
    ParticipantUnknownBold => "participantUnknownBold", "\u{f651}", "participant-unknown-bold";
    ParticipantUnknownLight => "participantUnknownLight", "\u{f652}", "participant-unknown-light";
    ParticipantUnknownRegular => "participantUnknownRegular", "\u{f653}", "participant-unknown-regular";
    PassMouseBold => "passMouseBold", "\u{f654}", "pass-mouse-bold";
    PassMouseLight => "passMouseLight", "\u{f655}", "pass-mouse-light";
    PassMouseRegular => "passMouseRegular", "\u{f656}", "pass-mouse-regular";
    PauseBold => "pauseBold", "\u{f657}", "pause-bold";
    PauseFilled => "pauseFilled", "\u{f658}", "pause-filled";
    PauseLight => "pauseLight", "\u{f659}", "pause-light";
    PauseRegular => "pauseRegular", "\u{f65a}", "pause-regular";
    PenBold => "penBold", "\u{f65b}", "pen-bold";
    PenFilled => "penFilled", "\u{f65c}", "pen-filled";
    PenLight => "penLight", "\u{f65d}", "pen-light";
    PenRegular => "penRegular", "\u{f65e}", "pen-regular";
    PeopleBold => "peopleBold", "\u{f65f}", "people-bold";
    PeopleCircleBold => "peopleCircleBold", "\u{f660}", "people-circle-bold";
    PeopleCircleFilled => "peopleCircleFilled", "\u{f661}", "people-circle-filled";
    PeopleCircleLight => "peopleCircleLight", "\u{f662}", "people-circle-light";
    PeopleCircleRegular => "peopleCircleRegular", "\u{f663}", "people-circle-regular";
    PeopleFilled => "peopleFilled", "\u{f664}", "people-filled";
    PeopleInsightsFilled => "peopleInsightsFilled", "\u{f665}", "people-insights-filled";
    PeopleLight => "peopleLight", "\u{f666}", "people-light";
    PeopleRegular => "peopleRegular", "\u{f667}", "people-regular";
    PhoneAlertBold => "phoneAlertBold", "\u{f668}", "phone-alert-bold";
    PhoneAlertLight => "phoneAlertLight", "\u{f669}", "phone-alert-light";
    PhoneAlertRegular => "phoneAlertRegular", "\u{f66a}", "phone-alert-regular";
    PhoneBold => "phoneBold", "\u{f66b}", "phone-bold";
    PhoneFilled => "phoneFilled", "\u{f66c}", "phone-filled";
    PhoneLight => "phoneLight", "\u{f66d}", "phone-light";
    PhoneMutedBold => "phoneMutedBold", "\u{f66e}", "phone-muted-bold";
    PhoneMutedLight => "phoneMutedLight", "\u{f66f}", "phone-muted-light";
    PhoneMutedRegular => "phoneMutedRegular", "\u{f670}", "phone-muted-regular";
    PhonePrivateBold => "phonePrivateBold", "\u{f671}", "phone-private-bold";
    PhonePrivateLight => "phonePrivateLight", "\u{f672}", "phone-private-light";
    PhonePrivateRegular => "phonePrivateRegular", "\u{f673}", "phone-private-regular";
    PhoneRegular => "phoneRegular", "\u{f674}", "phone-regular";
    PhoneReplyAllBold => "phoneReplyAllBold", "\u{f675}", "phone-reply-all-bold";
    PhoneReplyAllLight => "phoneReplyAllLight", "\u{f676}", "phone-reply-all-light";
    PhoneReplyAllRegular => "phoneReplyAllRegular", "\u{f677}", "phone-reply-all-regular";
    PhoneReplyBold => "phoneReplyBold", "\u{f678}", "phone-reply-bold";
    PhoneReplyLight => "phoneReplyLight", "\u{f679}", "phone-reply-light";
    PhoneReplyRegular => "phoneReplyRegular", "\u{f67a}", "phone-reply-regular";
    PhoneSmallFilled => "phoneSmallFilled", "\u{f67b}", "phone-small-filled";
    PickerBold => "pickerBold", "\u{f67c}", "picker-bold";
    PickerLight => "pickerLight", "\u{f67d}", "picker-light";
    PickerRegular => "pickerRegular", "\u{f67e}", "picker-regular";
    PictureInPictureBold => "pictureInPictureBold", "\u{f67f}", "picture-in-picture-bold";
    PictureInPictureLight => "pictureInPictureLight", "\u{f680}", "picture-in-picture-light";
    PictureInPictureRegular => "pictureInPictureRegular", "\u{f681}", "picture-in-picture-regular";
    PieChartBold => "pieChartBold", "\u{f682}", "pie-chart-bold";
    PieChartFilled => "pieChartFilled", "\u{f683}", "pie-chart-filled";
    PieChartLight => "pieChartLight", "\u{f684}", "pie-chart-light";
    PieChartRegular => "pieChartRegular", "\u{f685}", "pie-chart-regular";
    PinBold => "pinBold", "\u{f686}", "pin-bold";
    PinFilled => "pinFilled", "\u{f687}", "pin-filled";
    PinLight => "pinLight", "\u{f688}", "pin-light";
    PinListActivityColoredBold => "pinListActivityColoredBold", "\u{f689}", "pin-list-activity-colored-bold";
    PinListActivityColoredLight => "pinListActivityColoredLight", "\u{f68a}", "pin-list-activity-colored-light";
    PinListActivityColoredRegular => "pinListActivityColoredRegular", "\u{f68b}", "pin-list-activity-colored-regular";
    PinListBold => "pinListBold", "\u{f68c}", "pin-list-bold";
    PinListLight => "pinListLight", "\u{f68d}", "pin-list-light";
    PinListRegular => "pinListRegular", "\u{f68e}", "pin-list-regular";
    PinMutedBold => "pinMutedBold", "\u{f68f}", "pin-muted-bold";
    PinMutedLight => "pinMutedLight", "\u{f690}", "pin-muted-light";
    PinMutedRegular => "pinMutedRegular", "\u{f691}", "pin-muted-regular";
    PinRegular => "pinRegular", "\u{f692}", "pin-regular";
    PlaceholderBold => "placeholderBold", "\u{f693}", "placeholder-bold";
    PlaceholderLight => "placeholderLight", "\u{f694}", "placeholder-light";
    PlaceholderRegular => "placeholderRegular", "\u{f695}", "placeholder-regular";
    PlayBold => "playBold", "\u{f696}", "play-bold";
    PlayFilled => "playFilled", "\u{f697}", "play-filled";
    PlayLight => "playLight", "\u{f698}", "play-light";
    PlayRegular => "playRegular", "\u{f699}", "play-regular";
    PlugAcBold => "plugAcBold", "\u{f69a}", "plug-ac-bold";
    PlugAcLight => "plugAcLight", "\u{f69b}", "plug-ac-light";
    PlugAcRegular => "plugAcRegular", "\u{f69c}", "plug-ac-regular";
    PlusBold => "plusBold", "\u{f69d}", "plus-bold";
    PlusCircleBold => "plusCircleBold", "\u{f69e}", "plus-circle-bold";
    PlusCircleFilled => "plusCircleFilled", "\u{f69f}", "plus-circle-filled";
    PlusCircleLight => "plusCircleLight", "\u{f6a0}", "plus-circle-light";
    PlusCircleRegular => "plusCircleRegular", "\u{f6a1}", "plus-circle-regular";
    PlusLight => "plusLight", "\u{f6a2}", "plus-light";
    PlusRegular => "plusRegular", "\u{f6a3}", "plus-regular";
    PmrBold => "pmrBold", "\u{f6a4}", "pmr-bold";
    PmrFilled => "pmrFilled", "\u{f6a5}", "pmr-filled";
    PmrLight => "pmrLight", "\u{f6a6}", "pmr-light";
    PmrRegular => "pmrRegular", "\u{f6a7}", "pmr-regular";
    PollBold => "pollBold", "\u{f6a8}", "poll-bold";
    PollLight => "pollLight", "\u{f6a9}", "poll-light";
    PollRegular => "pollRegular", "\u{f6aa}", "poll-regular";
    PopInBold => "popInBold", "\u{f6ab}", "pop-in-bold";
    PopInLight => "popInLight", "\u{f6ac}", "pop-in-light";
    PopInRegular => "popInRegular", "\u{f6ad}", "pop-in-regular";
    PopOutBold => "popOutBold", "\u{f6ae}", "pop-out-bold";
    PopOutLight => "popOutLight", "\u{f6af}", "pop-out-light";
    PopOutRegular => "popOutRegular", "\u{f6b0}", "pop-out-regular";
    PopUpBold => "popUpBold", "\u{f6b1}", "pop-up-bold";
    PopUpLight => "popUpLight", "\u{f6b2}", "pop-up-light";
    PopUpRegular => "popUpRegular", "\u{f6b3}", "pop-up-regular";
    PortraitLandscapeBold => "portraitLandscapeBold", "\u{f6b4}", "portrait-landscape-bold";
    PortraitLandscapeLight => "portraitLandscapeLight", "\u{f6b5}", "portrait-landscape-light";
    PortraitLandscapeRegular => "portraitLandscapeRegular", "\u{f6b6}", "portrait-landscape-regular";
    PowerAcBold => "powerAcBold", "\u{f6b7}", "power-ac-bold";
    PowerAcLight => "powerAcLight", "\u{f6b8}", "power-ac-light";
    PowerAcRegular => "powerAcRegular", "\u{f6b9}", "power-ac-regular";
    PowerBold => "powerBold", "\u{f6ba}", "power-bold";
    PowerLight => "powerLight", "\u{f6bb}", "power-light";
    PowerRegular => "powerRegular", "\u{f6bc}", "power-regular";
    PresentationBold => "presentationBold", "\u{f6bd}", "presentation-bold";
    PresentationLight => "presentationLight", "\u{f6be}", "presentation-light";
    PresentationRegular => "presentationRegular", "\u{f6bf}", "presentation-regular";
    PrintBold => "printBold", "\u{f6c0}", "print-bold";
    PrintLight => "printLight", "\u{f6c1}", "print-light";
    PrintRegular => "printRegular", "\u{f6c2}", "print-regular";
    PriorityBadgeFilled => "priorityBadgeFilled", "\u{f6c3}", "priority-badge-filled";
    PriorityCircleBold => "priorityCircleBold", "\u{f6c4}", "priority-circle-bold";
    PriorityCircleFilled => "priorityCircleFilled", "\u{f6c5}", "priority-circle-filled";
    PriorityCircleLight => "priorityCircleLight", "\u{f6c6}", "priority-circle-light";
    PriorityCircleRegular => "priorityCircleRegular", "\u{f6c7}", "priority-circle-regular";
    PriorityCircleTwoBold => "priorityCircleTwoBold", "\u{f6c8}", "priority-circle-two-bold";
    PriorityCircleTwoFilled => "priorityCircleTwoFilled", "\u{f6c9}", "priority-circle-two-filled";
    PriorityCircleTwoLight => "priorityCircleTwoLight", "\u{f6ca}", "priority-circle-two-light";
    PriorityCircleTwoRegular => "priorityCircleTwoRegular", "\u{f6cb}", "priority-circle-two-regular";
    PrivacyCircleBold => "privacyCircleBold", "\u{f6cc}", "privacy-circle-bold";
    PrivacyCircleFilled => "privacyCircleFilled", "\u{f6cd}", "privacy-circle-filled";
    PrivacyCircleLight => "privacyCircleLight", "\u{f6ce}", "privacy-circle-light";
    PrivacyCircleRegular => "privacyCircleRegular", "\u{f6cf}", "privacy-circle-regular";
    PrivateBold => "privateBold", "\u{f6d0}", "private-bold";
    PrivateCircleBold => "privateCircleBold", "\u{f6d1}", "private-circle-bold";
    PrivateCircleFilled => "privateCircleFilled", "\u{f6d2}", "private-circle-filled";
    PrivateCircleLight => "privateCircleLight", "\u{f6d3}", "private-circle-light";
    PrivateCircleRegular => "privateCircleRegular", "\u{f6d4}", "private-circle-regular";
    PrivateLight => "privateLight", "\u{f6d5}", "private-light";
    PrivateMeetingBold => "privateMeetingBold", "\u{f6d6}", "private-meeting-bold";
    PrivateMeetingLight => "privateMeetingLight", "\u{f6d7}", "private-meeting-light";
    PrivateMeetingRegular => "privateMeetingRegular", "\u{f6d8}", "private-meeting-regular";
    PrivateRegular => "privateRegular", "\u{f6d9}", "private-regular";
    ProductDemoBold => "productDemoBold", "\u{f6da}", "product-demo-bold";
    ProductDemoLight => "productDemoLight", "\u{f6db}", "product-demo-light";
    ProductDemoRegular => "productDemoRegular", "\u{f6dc}", "product-demo-regular";
    ProximityBold => "proximityBold", "\u{f6dd}", "proximity-bold";
    ProximityLight => "proximityLight", "\u{f6de}", "proximity-light";
    ProximityMutedBold => "proximityMutedBold", "\u{f6df}", "proximity-muted-bold";
    ProximityMutedLight => "proximityMutedLight", "\u{f6e0}", "proximity-muted-light";
    ProximityMutedRegular => "proximityMutedRegular", "\u{f6e1}", "proximity-muted-regular";
    ProximityRegular => "proximityRegular", "\u{f6e2}", "proximity-regular";
    ProximityVideoBold => "proximityVideoBold", "\u{f6e3}", "proximity-video-bold";
    ProximityVideoLight => "proximityVideoLight", "\u{f6e4}", "proximity-video-light";
    ProximityVideoRegular => "proximityVideoRegular", "\u{f6e5}", "proximity-video-regular";
    PtoPresenceBold => "ptoPresenceBold", "\u{f6e6}", "pto-presence-bold";
    PtoPresenceFilled => "ptoPresenceFilled", "\u{f6e7}", "pto-presence-filled";
    PtoPresenceLight => "ptoPresenceLight", "\u{f6e8}", "pto-presence-light";
    PtoPresenceRegular => "ptoPresenceRegular", "\u{f6e9}", "pto-presence-regular";
    PullCallBold => "pullCallBold", "\u{f6ea}", "pull-call-bold";
    PullCallLight => "pullCallLight", "\u{f6eb}", "pull-call-light";
    PullCallRegular => "pullCallRegular", "\u{f6ec}", "pull-call-regular";
    QABold => "qABold", "\u{f6ed}", "q-a-bold";
    QALight => "qALight", "\u{f6ee}", "q-a-light";
    QARegular => "qARegular", "\u{f6ef}", "q-a-regular";
    QualityBold => "qualityBold", "\u{f6f0}", "quality-bold";
    QualityLight => "qualityLight", "\u{f6f1}", "quality-light";
    QualityRegular => "qualityRegular", "\u{f6f2}", "quality-regular";
    QueueContactBold => "queueContactBold", "\u{f6f3}", "queue-contact-bold";
    QueueContactLight => "queueContactLight", "\u{f6f4}", "queue-contact-light";
    QueueContactRegular => "queueContactRegular", "\u{f6f5}", "queue-contact-regular";
    QuietBold => "quietBold", "\u{f6f6}", "quiet-bold";
    QuietHoursPresenceBold => "quietHoursPresenceBold", "\u{f6f7}", "quiet-hours-presence-bold";
    QuietHoursPresenceFilled => "quietHoursPresenceFilled", "\u{f6f8}", "quiet-hours-presence-filled";
    QuietHoursPresenceLight => "quietHoursPresenceLight", "\u{f6f9}", "quiet-hours-presence-light";
    QuietHoursPresenceRegular => "quietHoursPresenceRegular", "\u{f6fa}", "quiet-hours-presence-regular";
    QuietLight => "quietLight", "\u{f6fb}", "quiet-light";
    QuietRegular => "quietRegular", "\u{f6fc}", "quiet-regular";
    RaiseHandBold => "raiseHandBold", "\u{f6fd}", "raise-hand-bold";
    RaiseHandLight => "raiseHandLight", "\u{f6fe}", "raise-hand-light";
    RaiseHandRegular => "raiseHandRegular", "\u{f6ff}", "raise-hand-regular";
    RamBold => "ramBold", "\u{f700}", "ram-bold";
    RamLight => "ramLight", "\u{f701}", "ram-light";
    RamRegular => "ramRegular", "\u{f702}", "ram-regular";
    ReactionsBold => "reactionsBold", "\u{f703}", "reactions-bold";
    ReactionsFilled => "reactionsFilled", "\u{f704}", "reactions-filled";
    ReactionsLight => "reactionsLight", "\u{f705}", "reactions-light";
    ReactionsRegular => "reactionsRegular", "\u{f706}", "reactions-regular";
    ReactivateBold => "reactivateBold", "\u{f707}", "reactivate-bold";
    ReactivateLight => "reactivateLight", "\u{f708}", "reactivate-light";
    ReactivateRegular => "reactivateRegular", "\u{f709}", "reactivate-regular";
    RecentsBold => "recentsBold", "\u{f70a}", "recents-bold";
    RecentsFilled => "recentsFilled", "\u{f70b}", "recents-filled";
    RecentsLight => "recentsLight", "\u{f70c}", "recents-light";
    RecentsPresenceBold => "recentsPresenceBold", "\u{f70d}", "recents-presence-bold";
    RecentsPresenceFilled => "recentsPresenceFilled", "\u{f70e}", "recents-presence-filled";
    RecentsPresenceLight => "recentsPresenceLight", "\u{f70f}", "recents-presence-light";
    RecentsPresenceRegular => "recentsPresenceRegular", "\u{f710}", "recents-presence-regular";
    RecentsPresenceSmallFilled => "recentsPresenceSmallFilled", "\u{f711}", "recents-presence-small-filled";
    RecentsRegular => "recentsRegular", "\u{f712}", "recents-regular";
    RecordBold => "recordBold", "\u{f713}", "record-bold";
    RecordFilled => "recordFilled", "\u{f714}", "record-filled";
    RecordLight => "recordLight", "\u{f715}", "record-light";
    RecordPausedBold => "recordPausedBold", "\u{f716}", "record-paused-bold";
    RecordPausedFilled => "recordPausedFilled", "\u{f717}", "record-paused-filled";
    RecordPausedLight => "recordPausedLight", "\u{f718}", "record-paused-light";
    RecordPausedRegular => "recordPausedRegular", "\u{f719}", "record-paused-regular";
    RecordRegular => "recordRegular", "\u{f71a}", "record-regular";
    RecurringBold => "recurringBold", "\u{f71b}", "recurring-bold";
    RecurringLight => "recurringLight", "\u{f71c}", "recurring-light";
    RecurringOffBold => "recurringOffBold", "\u{f71d}", "recurring-off-bold";
    RecurringOffLight => "recurringOffLight", "\u{f71e}", "recurring-off-light";
    RecurringOffRegular => "recurringOffRegular", "\u{f71f}", "recurring-off-regular";
    RecurringRegular => "recurringRegular", "\u{f720}", "recurring-regular";
    RedialBold => "redialBold", "\u{f721}", "redial-bold";
    RedialLight => "redialLight", "\u{f722}", "redial-light";
    RedialRegular => "redialRegular", "\u{f723}", "redial-regular";
    RedoBold => "redoBold", "\u{f724}", "redo-bold";
    RedoLight => "redoLight", "\u{f725}", "redo-light";
    RedoRegular => "redoRegular", "\u{f726}", "redo-regular";
    RefreshBold => "refreshBold", "\u{f727}", "refresh-bold";
    RefreshLight => "refreshLight", "\u{f728}", "refresh-light";
    RefreshRegular => "refreshRegular", "\u{f729}", "refresh-regular";
    RemoteDesktopControlBold => "remoteDesktopControlBold", "\u{f72a}", "remote-desktop-control-bold";
    RemoteDesktopControlFilled => "remoteDesktopControlFilled", "\u{f72b}", "remote-desktop-control-filled";
    RemoteDesktopControlLight => "remoteDesktopControlLight", "\u{f72c}", "remote-desktop-control-light";
    RemoteDesktopControlRegular => "remoteDesktopControlRegular", "\u{f72d}", "remote-desktop-control-regular";
    RemoveBold => "removeBold", "\u{f72e}", "remove-bold";
    RemoveFilled => "removeFilled", "\u{f72f}", "remove-filled";
    RemoveLight => "removeLight", "\u{f730}", "remove-light";
    RemoveRegular => "removeRegular", "\u{f731}", "remove-regular";
    ReplyBold => "replyBold", "\u{f732}", "reply-bold";
    ReplyFilled => "replyFilled", "\u{f733}", "reply-filled";
    ReplyLight => "replyLight", "\u{f734}", "reply-light";
    ReplyListBold => "replyListBold", "\u{f735}", "reply-list-bold";
    ReplyListLight => "replyListLight", "\u{f736}", "reply-list-light";
    ReplyListRegular => "replyListRegular", "\u{f737}", "reply-list-regular";
    ReplyRegular => "replyRegular", "\u{f738}", "reply-regular";
    ResetBold => "resetBold", "\u{f739}", "reset-bold";
    ResetLight => "resetLight", "\u{f73a}", "reset-light";
    ResetRegular => "resetRegular", "\u{f73b}", "reset-regular";
    ResponsiveMobileBold => "responsiveMobileBold", "\u{f73c}", "responsive-mobile-bold";
    ResponsiveMobileLight => "responsiveMobileLight", "\u{f73d}", "responsive-mobile-light";
    ResponsiveMobileRegular => "responsiveMobileRegular", "\u{f73e}", "responsive-mobile-regular";
    RestartBold => "restartBold", "\u{f73f}", "restart-bold";
    RestartLight => "restartLight", "\u{f740}", "restart-light";
    RestartRegular => "restartRegular", "\u{f741}", "restart-regular";
    ReturnBold => "returnBold", "\u{f742}", "return-bold";
    ReturnLight => "returnLight", "\u{f743}", "return-light";
    ReturnRegular => "returnRegular", "\u{f744}", "return-regular";
    RingtoneBold => "ringtoneBold", "\u{f745}", "ringtone-bold";
    RingtoneLight => "ringtoneLight", "\u{f746}", "ringtone-light";
    RingtoneRegular => "ringtoneRegular", "\u{f747}", "ringtone-regular";
    RoomCalendarBold => "roomCalendarBold", "\u{f748}", "room-calendar-bold";
    RoomCalendarLight => "roomCalendarLight", "\u{f749}", "room-calendar-light";
    RoomCalendarRegular => "roomCalendarRegular", "\u{f74a}", "room-calendar-regular";
    RoomLightsBold => "roomLightsBold", "\u{f74b}", "room-lights-bold";
    RoomLightsFilled => "roomLightsFilled", "\u{f74c}", "room-lights-filled";
    RoomLightsLight => "roomLightsLight", "\u{f74d}", "room-lights-light";
    RoomLightsRegular => "roomLightsRegular", "\u{f74e}", "room-lights-regular";
    RotateContentBold => "rotateContentBold", "\u{f74f}", "rotate-content-bold";
    RotateContentFilled => "rotateContentFilled", "\u{f750}", "rotate-content-filled";
    RotateContentLight => "rotateContentLight", "\u{f751}", "rotate-content-light";
    RotateContentRegular => "rotateContentRegular", "\u{f752}", "rotate-content-regular";
    RunningApplicationBold => "runningApplicationBold", "\u{f753}", "running-application-bold";
    RunningApplicationFilled => "runningApplicationFilled", "\u{f754}", "running-application-filled";
    RunningApplicationLight => "runningApplicationLight", "\u{f755}", "running-application-light";
    RunningApplicationRegular => "runningApplicationRegular", "\u{f756}", "running-application-regular";
    SaveBold => "saveBold", "\u{f757}", "save-bold";
    SaveLight => "saveLight", "\u{f758}", "save-light";
    SaveRegular => "saveRegular", "\u{f759}", "save-regular";
    ScanBold => "scanBold", "\u{f75a}", "scan-bold";
    ScanLight => "scanLight", "\u{f75b}", "scan-light";
    ScanRegular => "scanRegular", "\u{f75c}", "scan-regular";
    SchedulerAvailableBold => "schedulerAvailableBold", "\u{f75d}", "scheduler-available-bold";
    SchedulerAvailableLight => "schedulerAvailableLight", "\u{f75e}", "scheduler-available-light";
    SchedulerAvailableRegular => "schedulerAvailableRegular", "\u{f75f}", "scheduler-available-regular";
    SchedulerNotWorkingHoursBold => "schedulerNotWorkingHoursBold", "\u{f760}", "scheduler-not-working-hours-bold";
    SchedulerNotWorkingHoursLight => "schedulerNotWorkingHoursLight", "\u{f761}", "scheduler-not-working-hours-light";
    SchedulerNotWorkingHoursRegular => "schedulerNotWorkingHoursRegular", "\u{f762}", "scheduler-not-working-hours-regular";
    SchedulerUnavailableBold => "schedulerUnavailableBold", "\u{f763}", "scheduler-unavailable-bold";
    SchedulerUnavailableLight => "schedulerUnavailableLight", "\u{f764}", "scheduler-unavailable-light";
    SchedulerUnavailableRegular => "schedulerUnavailableRegular", "\u{f765}", "scheduler-unavailable-regular";
    SchedulerUnknownBold => "schedulerUnknownBold", "\u{f766}", "scheduler-unknown-bold";
    SchedulerUnknownLight => "schedulerUnknownLight", "\u{f767}", "scheduler-unknown-light";
    SchedulerUnknownRegular => "schedulerUnknownRegular", "\u{f768}", "scheduler-unknown-regular";
    ScreenshotBold => "screenshotBold", "\u{f769}", "screenshot-bold";
    ScreenshotDocBold => "screenshotDocBold", "\u{f76a}", "screenshot-doc-bold";
    ScreenshotDocFilled => "screenshotDocFilled", "\u{f76b}", "screenshot-doc-filled";
    ScreenshotDocLight => "screenshotDocLight", "\u{f76c}", "screenshot-doc-light";
    ScreenshotDocRegular => "screenshotDocRegular", "\u{f76d}", "screenshot-doc-regular";
    ScreenshotLight => "screenshotLight", "\u{f76e}", "screenshot-light";
    ScreenshotRegular => "screenshotRegular", "\u{f76f}", "screenshot-regular";
    SearchBold => "searchBold", "\u{f770}", "search-bold";
    SearchFilled => "searchFilled", "\u{f771}", "search-filled";
    SearchLight => "searchLight", "\u{f772}", "search-light";
    SearchRegular => "searchRegular", "\u{f773}", "search-regular";
    SecondaryArrowBold => "secondaryArrowBold", "\u{f774}", "secondary-arrow-bold";
    SecondaryArrowLight => "secondaryArrowLight", "\u{f775}", "secondary-arrow-light";
    SecondaryArrowRegular => "secondaryArrowRegular", "\u{f776}", "secondary-arrow-regular";
    SecureCallLockBold => "secureCallLockBold", "\u{f777}", "secure-call-lock-bold";
    SecureCallLockFilled => "secureCallLockFilled", "\u{f778}", "secure-call-lock-filled";
    SecureCallLockLight => "secureCallLockLight", "\u{f779}", "secure-call-lock-light";
    SecureCallLockRegular => "secureCallLockRegular", "\u{f77a}", "secure-call-lock-regular";
    SecureCallShieldBold => "secureCallShieldBold", "\u{f77b}", "secure-call-shield-bold";
    SecureCallShieldFilled => "secureCallShieldFilled", "\u{f77c}", "secure-call-shield-filled";
    SecureCallShieldLight => "secureCallShieldLight", "\u{f77d}", "secure-call-shield-light";
    SecureCallShieldRegular => "secureCallShieldRegular", "\u{f77e}", "secure-call-shield-regular";
    SecureCircleBold => "secureCircleBold", "\u{f77f}", "secure-circle-bold";
    SecureCircleFilled => "secureCircleFilled", "\u{f780}", "secure-circle-filled";
    SecureCircleLight => "secureCircleLight", "\u{f781}", "secure-circle-light";
    SecureCircleRegular => "secureCircleRegular", "\u{f782}", "secure-circle-regular";
    SecureLockBold => "secureLockBold", "\u{f783}", "secure-lock-bold";
    SecureLockFilled => "secureLockFilled", "\u{f784}", "secure-lock-filled";
    SecureLockLight => "secureLockLight", "\u{f785}", "secure-lock-light";
    SecureLockRegular => "secureLockRegular", "\u{f786}", "secure-lock-regular";
    SelectAllBold => "selectAllBold", "\u{f787}", "select-all-bold";
    SelectAllFilled => "selectAllFilled", "\u{f788}", "select-all-filled";
    SelectAllLight => "selectAllLight", "\u{f789}", "select-all-light";
    SelectAllRegular => "selectAllRegular", "\u{f78a}", "select-all-regular";
    SelectionBold => "selectionBold", "\u{f78b}", "selection-bold";
    SelectionLight => "selectionLight", "\u{f78c}", "selection-light";
    SelectionRegular => "selectionRegular", "\u{f78d}", "selection-regular";
    SendBold => "sendBold", "\u{f78e}", "send-bold";
    SendFilled => "sendFilled", "\u{f78f}", "send-filled";
    SendLight => "sendLight", "\u{f790}", "send-light";
    SendRegular => "sendRegular", "\u{f791}", "send-regular";
    ServerBold => "serverBold", "\u{f792}", "server-bold";
    ServerErrorBold => "serverErrorBold", "\u{f793}", "server-error-bold";
    ServerErrorLight => "serverErrorLight", "\u{f794}", "server-error-light";
    ServerErrorRegular => "serverErrorRegular", "\u{f795}", "server-error-regular";
    ServerLight => "serverLight", "\u{f796}", "server-light";
    ServerRegular => "serverRegular", "\u{f797}", "server-regular";
    ServicesBold => "servicesBold", "\u{f798}", "services-bold";
    ServicesLight => "servicesLight", "\u{f799}", "services-light";
    ServicesRegular => "servicesRegular", "\u{f79a}", "services-regular";
    SetVariableBold => "setVariableBold", "\u{f79b}", "set-variable-bold";
    SetVariableLight => "setVariableLight", "\u{f79c}", "set-variable-light";
    SetVariableRegular => "setVariableRegular", "\u{f79d}", "set-variable-regular";
    SettingsBold => "settingsBold", "\u{f79e}", "settings-bold";
    SettingsFilled => "settingsFilled", "\u{f79f}", "settings-filled";
    SettingsLight => "settingsLight", "\u{f7a0}", "settings-light";
    SettingsRegular => "settingsRegular", "\u{f7a1}", "settings-regular";
    SetupAssistantBold => "setupAssistantBold", "\u{f7a2}", "setup-assistant-bold";
    SetupAssistantLight => "setupAssistantLight", "\u{f7a3}", "setup-assistant-light";
    SetupAssistantRegular => "setupAssistantRegular", "\u{f7a4}", "setup-assistant-regular";
    ShapeDiagonalLineBold => "shapeDiagonalLineBold", "\u{f7a5}", "shape-diagonal-line-bold";
    ShapeDiagonalLineLight => "shapeDiagonalLineLight", "\u{f7a6}", "shape-diagonal-line-light";
    ShapeDiagonalLineRegular => "shapeDiagonalLineRegular", "\u{f7a7}", "shape-diagonal-line-regular";
    ShapeOvalBold => "shapeOvalBold", "\u{f7a8}", "shape-oval-bold";
    ShapeOvalLight => "shapeOvalLight", "\u{f7a9}", "shape-oval-light";
    ShapeOvalRegular => "shapeOvalRegular", "\u{f7aa}", "shape-oval-regular";
    ShapesBold => "shapesBold", "\u{f7ab}", "shapes-bold";
    ShapesLight => "shapesLight", "\u{f7ac}", "shapes-light";
    ShapesRegular => "shapesRegular", "\u{f7ad}", "shapes-regular";
    ShareCNativeAdrBold => "shareCNativeAdrBold", "\u{f7ae}", "share-c-native-adr-bold";
    ShareCNativeAdrLight => "shareCNativeAdrLight", "\u{f7af}", "share-c-native-adr-light";
    ShareCNativeAdrRegular => "shareCNativeAdrRegular", "\u{f7b0}", "share-c-native-adr-regular";
    ShareCNativeIphBold => "shareCNativeIphBold", "\u{f7b1}", "share-c-native-iph-bold";
    ShareCNativeIphLight => "shareCNativeIphLight", "\u{f7b2}", "share-c-native-iph-light";
    ShareCNativeIphRegular => "shareCNativeIphRegular", "\u{f7b3}", "share-c-native-iph-regular";
    ShareScreenBold => "shareScreenBold", "\u{f7b4}", "share-screen-bold";
    ShareScreenFilled => "shareScreenFilled", "\u{f7b5}", "share-screen-filled";
    ShareScreenLight => "shareScreenLight", "\u{f7b6}", "share-screen-light";
    ShareScreenRegular => "shareScreenRegular", "\u{f7b7}", "share-screen-regular";
    ShareScreenSmallFilled => "shareScreenSmallFilled", "\u{f7b8}", "share-screen-small-filled";
    ShareSpaceBold => "shareSpaceBold", "\u{f7b9}", "share-space-bold";
    ShareSpaceLight => "shareSpaceLight", "\u{f7ba}", "share-space-light";
    ShareSpaceRegular => "shareSpaceRegular", "\u{f7bb}", "share-space-regular";
    ShieldBold => "shieldBold", "\u{f7bc}", "shield-bold";
    ShieldLight => "shieldLight", "\u{f7bd}", "shield-light";
    ShieldRegular => "shieldRegular", "\u{f7be}", "shield-regular";
    ShowBold => "showBold", "\u{f7bf}", "show-bold";
    ShowFilled => "showFilled", "\u{f7c0}", "show-filled";
    ShowLight => "showLight", "\u{f7c1}", "show-light";
    ShowRegular => "showRegular", "\u{f7c2}", "show-regular";
    SignInBold => "signInBold", "\u{f7c3}", "sign-in-bold";
    SignInForcedBold => "signInForcedBold", "\u{f7c4}", "sign-in-forced-bold";
    SignInForcedLight => "signInForcedLight", "\u{f7c5}", "sign-in-forced-light";
    SignInForcedRegular => "signInForcedRegular", "\u{f7c6}", "sign-in-forced-regular";
    SignInLight => "signInLight", "\u{f7c7}", "sign-in-light";
    SignInRegular => "signInRegular", "\u{f7c8}", "sign-in-regular";
    SignOutBold => "signOutBold", "\u{f7c9}", "sign-out-bold";
    SignOutLight => "signOutLight", "\u{f7ca}", "sign-out-light";
    SignOutRegular => "signOutRegular", "\u{f7cb}", "sign-out-regular";
    Signal0Bold => "signal0Bold", "\u{f7cc}", "signal-0-bold";
    Signal0Light => "signal0Light", "\u{f7cd}", "signal-0-light";
    Signal0Regular => "signal0Regular", "\u{f7ce}", "signal-0-regular";
    Signal100Bold => "signal100Bold", "\u{f7cf}", "signal-100-bold";
    Signal100Light => "signal100Light", "\u{f7d0}", "signal-100-light";
    Signal100Regular => "signal100Regular", "\u{f7d1}", "signal-100-regular";
    Signal25Bold => "signal25Bold", "\u{f7d2}", "signal-25-bold";
    Signal25Light => "signal25Light", "\u{f7d3}", "signal-25-light";
    Signal25Regular => "signal25Regular", "\u{f7d4}", "signal-25-regular";
    Signal50Bold => "signal50Bold", "\u{f7d5}", "signal-50-bold";
    Signal50Light => "signal50Light", "\u{f7d6}", "signal-50-light";
    Signal50Regular => "signal50Regular", "\u{f7d7}", "signal-50-regular";
    Signal75Bold => "signal75Bold", "\u{f7d8}", "signal-75-bold";
    Signal75Light => "signal75Light", "\u{f7d9}", "signal-75-light";
    Signal75Regular => "signal75Regular", "\u{f7da}", "signal-75-regular";
    SingleNumberReachBold => "singleNumberReachBold", "\u{f7db}", "single-number-reach-bold";
    SingleNumberReachLight => "singleNumberReachLight", "\u{f7dc}", "single-number-reach-light";
    SingleNumberReachRegular => "singleNumberReachRegular", "\u{f7dd}", "single-number-reach-regular";
    SipRegistrationInProgressBold => "sipRegistrationInProgressBold", "\u{f7de}", "sip-registration-in-progress-bold";
    SipRegistrationInProgressFilled => "sipRegistrationInProgressFilled", "\u{f7df}", "sip-registration-in-progress-filled";
    SipRegistrationInProgressLight => "sipRegistrationInProgressLight", "\u{f7e0}", "sip-registration-in-progress-light";
    SipRegistrationInProgressRegular => "sipRegistrationInProgressRegular", "\u{f7e1}", "sip-registration-in-progress-regular";
    SkipBold => "skipBold", "\u{f7e2}", "skip-bold";
    SkipBwBold => "skipBwBold", "\u{f7e3}", "skip-bw-bold";
    SkipBwFilled => "skipBwFilled", "\u{f7e4}", "skip-bw-filled";
    SkipBwLight => "skipBwLight", "\u{f7e5}", "skip-bw-light";
    SkipBwRegular => "skipBwRegular", "\u{f7e6}", "skip-bw-regular";
    SkipFwBold => "skipFwBold", "\u{f7e7}", "skip-fw-bold";
    SkipFwFilled => "skipFwFilled", "\u{f7e8}", "skip-fw-filled";
    SkipFwLight => "skipFwLight", "\u{f7e9}", "skip-fw-light";
    SkipFwRegular => "skipFwRegular", "\u{f7ea}", "skip-fw-regular";
    SkipLight => "skipLight", "\u{f7eb}", "skip-light";
    SkipRegular => "skipRegular", "\u{f7ec}", "skip-regular";
    SpeakerBold => "speakerBold", "\u{f7ed}", "speaker-bold";
    SpeakerDisconnectedBold => "speakerDisconnectedBold", "\u{f7ee}", "speaker-disconnected-bold";
    SpeakerDisconnectedFilled => "speakerDisconnectedFilled", "\u{f7ef}", "speaker-disconnected-filled";
    SpeakerDisconnectedLight => "speakerDisconnectedLight", "\u{f7f0}", "speaker-disconnected-light";
    SpeakerDisconnectedRegular => "speakerDisconnectedRegular", "\u{f7f1}", "speaker-disconnected-regular";
    SpeakerFilled => "speakerFilled", "\u{f7f2}", "speaker-filled";
    SpeakerLight => "speakerLight", "\u{f7f3}", "speaker-light";
    SpeakerMutedBold => "speakerMutedBold", "\u{f7f4}", "speaker-muted-bold";
    SpeakerMutedFilled => "speakerMutedFilled", "\u{f7f5}", "speaker-muted-filled";
    SpeakerMutedLight => "speakerMutedLight", "\u{f7f6}", "speaker-muted-light";
    SpeakerMutedRegular => "speakerMutedRegular", "\u{f7f7}", "speaker-muted-regular";
    SpeakerOffBold => "speakerOffBold", "\u{f7f8}", "speaker-off-bold";
    SpeakerOffFilled => "speakerOffFilled", "\u{f7f9}", "speaker-off-filled";
    SpeakerOffLight => "speakerOffLight", "\u{f7fa}", "speaker-off-light";
    SpeakerOffRegular => "speakerOffRegular", "\u{f7fb}", "speaker-off-regular";
    SpeakerOnColoredBold => "speakerOnColoredBold", "\u{f7fc}", "speaker-on-colored-bold";
    SpeakerOnColoredLight => "speakerOnColoredLight", "\u{f7fd}", "speaker-on-colored-light";
    SpeakerOnColoredRegular => "speakerOnColoredRegular", "\u{f7fe}", "speaker-on-colored-regular";
    SpeakerRegular => "speakerRegular", "\u{f7ff}", "speaker-regular";
    SpeakerTurnDownBold => "speakerTurnDownBold", "\u{f800}", "speaker-turn-down-bold";
    SpeakerTurnDownFilled => "speakerTurnDownFilled", "\u{f801}", "speaker-turn-down-filled";
    SpeakerTurnDownLight => "speakerTurnDownLight", "\u{f802}", "speaker-turn-down-light";
    SpeakerTurnDownRegular => "speakerTurnDownRegular", "\u{f803}", "speaker-turn-down-regular";
    SpeakerTurnUpBold => "speakerTurnUpBold", "\u{f804}", "speaker-turn-up-bold";
    SpeakerTurnUpFilled => "speakerTurnUpFilled", "\u{f805}", "speaker-turn-up-filled";
    SpeakerTurnUpLight => "speakerTurnUpLight", "\u{f806}", "speaker-turn-up-light";
    SpeakerTurnUpRegular => "speakerTurnUpRegular", "\u{f807}", "speaker-turn-up-regular";
    SpinnerBold => "spinnerBold", "\u{f808}", "spinner-bold";
    SpinnerFilledBold => "spinnerFilledBold", "\u{f809}", "spinner-filled-bold";
    SpinnerFilledLight => "spinnerFilledLight", "\u{f80a}", "spinner-filled-light";
    SpinnerFilledRegular => "spinnerFilledRegular", "\u{f80b}", "spinner-filled-regular";
    SpinnerLight => "spinnerLight", "\u{f80c}", "spinner-light";
    SpinnerRegular => "spinnerRegular", "\u{f80d}", "spinner-regular";
    StackedArea100ChartBold => "stackedArea100ChartBold", "\u{f80e}", "stacked-area-100-chart-bold";
    StackedArea100ChartFilled => "stackedArea100ChartFilled", "\u{f80f}", "stacked-area-100-chart-filled";
    StackedArea100ChartLight => "stackedArea100ChartLight", "\u{f810}", "stacked-area-100-chart-light";
    StackedArea100ChartRegular => "stackedArea100ChartRegular", "\u{f811}", "stacked-area-100-chart-regular";
    StackedAreaChartBold => "stackedAreaChartBold", "\u{f812}", "stacked-area-chart-bold";
    StackedAreaChartFilled => "stackedAreaChartFilled", "\u{f813}", "stacked-area-chart-filled";
    StackedAreaChartLight => "stackedAreaChartLight", "\u{f814}", "stacked-area-chart-light";
    StackedAreaChartRegular => "stackedAreaChartRegular", "\u{f815}", "stacked-area-chart-regular";
    StackedBar100ChartBold => "stackedBar100ChartBold", "\u{f816}", "stacked-bar-100-chart-bold";
    StackedBar100ChartFilled => "stackedBar100ChartFilled", "\u{f817}", "stacked-bar-100-chart-filled";
    StackedBar100ChartLight => "stackedBar100ChartLight", "\u{f818}", "stacked-bar-100-chart-light";
    StackedBar100ChartRegular => "stackedBar100ChartRegular", "\u{f819}", "stacked-bar-100-chart-regular";
    StackedBarChartBold => "stackedBarChartBold", "\u{f81a}", "stacked-bar-chart-bold";
    StackedBarChartFilled => "stackedBarChartFilled", "\u{f81b}", "stacked-bar-chart-filled";
    StackedBarChartLight => "stackedBarChartLight", "\u{f81c}", "stacked-bar-chart-light";
    StackedBarChartRegular => "stackedBarChartRegular", "\u{f81d}", "stacked-bar-chart-regular";
    StartChatBold => "startChatBold", "\u{f81e}", "start-chat-bold";
    StartChatLight => "startChatLight", "\u{f81f}", "start-chat-light";
    StartChatRegular => "startChatRegular", "\u{f820}", "start-chat-regular";
    StickersBold => "stickersBold", "\u{f821}", "stickers-bold";
    StickersLight => "stickersLight", "\u{f822}", "stickers-light";
    StickersRegular => "stickersRegular", "\u{f823}", "stickers-regular";
    StickiesBold => "stickiesBold", "\u{f824}", "stickies-bold";
    StickiesLight => "stickiesLight", "\u{f825}", "stickies-light";
    StickiesRegular => "stickiesRegular", "\u{f826}", "stickies-regular";
    StopBold => "stopBold", "\u{f827}", "stop-bold";
    StopCircleBold => "stopCircleBold", "\u{f828}", "stop-circle-bold";
    StopCircleFilled => "stopCircleFilled", "\u{f829}", "stop-circle-filled";
    StopCircleLight => "stopCircleLight", "\u{f82a}", "stop-circle-light";
    StopCircleRegular => "stopCircleRegular", "\u{f82b}", "stop-circle-regular";
    StopContentShareBold => "stopContentShareBold", "\u{f82c}", "stop-content-share-bold";
    StopContentShareLight => "stopContentShareLight", "\u{f82d}", "stop-content-share-light";
    StopContentShareRegular => "stopContentShareRegular", "\u{f82e}", "stop-content-share-regular";
    StopFilled => "stopFilled", "\u{f82f}", "stop-filled";
    StopLight => "stopLight", "\u{f830}", "stop-light";
    StopRegular => "stopRegular", "\u{f831}", "stop-regular";
    StoredInfoBold => "storedInfoBold", "\u{f832}", "stored-info-bold";
    StoredInfoFilled => "storedInfoFilled", "\u{f833}", "stored-info-filled";
    StoredInfoLight => "storedInfoLight", "\u{f834}", "stored-info-light";
    StoredInfoRegular => "storedInfoRegular", "\u{f835}", "stored-info-regular";
    StreamingBold => "streamingBold", "\u{f836}", "streaming-bold";
    StreamingLight => "streamingLight", "\u{f837}", "streaming-light";
    StreamingRegular => "streamingRegular", "\u{f838}", "streaming-regular";
    StrikethroughBold => "strikethroughBold", "\u{f839}", "strikethrough-bold";
    StrikethroughLight => "strikethroughLight", "\u{f83a}", "strikethrough-light";
    StrikethroughRegular => "strikethroughRegular", "\u{f83b}", "strikethrough-regular";
    SubscriptBold => "subscriptBold", "\u{f83c}", "subscript-bold";
    SubscriptLight => "subscriptLight", "\u{f83d}", "subscript-light";
    SubscriptRegular => "subscriptRegular", "\u{f83e}", "subscript-regular";
    SuperscriptBold => "superscriptBold", "\u{f83f}", "superscript-bold";
    SuperscriptLight => "superscriptLight", "\u{f840}", "superscript-light";
    SuperscriptRegular => "superscriptRegular", "\u{f841}", "superscript-regular";
    Sx10Bold => "sx10Bold", "\u{f842}", "sx10-bold";
    Sx10Light => "sx10Light", "\u{f843}", "sx10-light";
    Sx10Regular => "sx10Regular", "\u{f844}", "sx10-regular";
    Sx20Bold => "sx20Bold", "\u{f845}", "sx20-bold";
    Sx20Light => "sx20Light", "\u{f846}", "sx20-light";
    Sx20Regular => "sx20Regular", "\u{f847}", "sx20-regular";
    Sx80CodecBold => "sx80CodecBold", "\u{f848}", "sx80-codec-bold";
    Sx80CodecLight => "sx80CodecLight", "\u{f849}", "sx80-codec-light";
    Sx80CodecRegular => "sx80CodecRegular", "\u{f84a}", "sx80-codec-regular";
    TableBold => "tableBold", "\u{f84b}", "table-bold";
    TableLight => "tableLight", "\u{f84c}", "table-light";
    TableRegular => "tableRegular", "\u{f84d}", "table-regular";
    TabletBold => "tabletBold", "\u{f84e}", "tablet-bold";
    TabletLight => "tabletLight", "\u{f84f}", "tablet-light";
    TabletRegular => "tabletRegular", "\u{f850}", "tablet-regular";
    TabsBold => "tabsBold", "\u{f851}", "tabs-bold";
    TabsLight => "tabsLight", "\u{f852}", "tabs-light";
    TabsRegular => "tabsRegular", "\u{f853}", "tabs-regular";
    TagBold => "tagBold", "\u{f854}", "tag-bold";
    TagLight => "tagLight", "\u{f855}", "tag-light";
    TagRegular => "tagRegular", "\u{f856}", "tag-regular";
    TelepresenceAlertBold => "telepresenceAlertBold", "\u{f857}", "telepresence-alert-bold";
    TelepresenceAlertLight => "telepresenceAlertLight", "\u{f858}", "telepresence-alert-light";
    TelepresenceAlertMutedBold => "telepresenceAlertMutedBold", "\u{f859}", "telepresence-alert-muted-bold";
    TelepresenceAlertMutedLight => "telepresenceAlertMutedLight", "\u{f85a}", "telepresence-alert-muted-light";
    TelepresenceAlertMutedRegular => "telepresenceAlertMutedRegular", "\u{f85b}", "telepresence-alert-muted-regular";
    TelepresenceAlertRegular => "telepresenceAlertRegular", "\u{f85c}", "telepresence-alert-regular";
    TelepresenceBold => "telepresenceBold", "\u{f85d}", "telepresence-bold";
    TelepresenceIx5000Bold => "telepresenceIx5000Bold", "\u{f85e}", "telepresence-ix5000-bold";
    TelepresenceIx5000Light => "telepresenceIx5000Light", "\u{f85f}", "telepresence-ix5000-light";
    TelepresenceIx5000Regular => "telepresenceIx5000Regular", "\u{f860}", "telepresence-ix5000-regular";
    TelepresenceLight => "telepresenceLight", "\u{f861}", "telepresence-light";
    TelepresencePrivateBold => "telepresencePrivateBold", "\u{f862}", "telepresence-private-bold";
    TelepresencePrivateLight => "telepresencePrivateLight", "\u{f863}", "telepresence-private-light";
    TelepresencePrivateRegular => "telepresencePrivateRegular", "\u{f864}", "telepresence-private-regular";
    TelepresenceRegular => "telepresenceRegular", "\u{f865}", "telepresence-regular";
    TemperatureBold => "temperatureBold", "\u{f866}", "temperature-bold";
    TemperatureLight => "temperatureLight", "\u{f867}", "temperature-light";
    TemperatureRegular => "temperatureRegular", "\u{f868}", "temperature-regular";
    TextBold => "textBold", "\u{f869}", "text-bold";
    TextCodeBlockBold => "textCodeBlockBold", "\u{f86a}", "text-code-block-bold";
    TextCodeBlockLight => "textCodeBlockLight", "\u{f86b}", "text-code-block-light";
    TextCodeBlockRegular => "textCodeBlockRegular", "\u{f86c}", "text-code-block-regular";
    TextHighlightBold => "textHighlightBold", "\u{f86d}", "text-highlight-bold";
    TextHighlightLight => "textHighlightLight", "\u{f86e}", "text-highlight-light";
    TextHighlightRegular => "textHighlightRegular", "\u{f86f}", "text-highlight-regular";
    TextLight => "textLight", "\u{f870}", "text-light";
    TextRegular => "textRegular", "\u{f871}", "text-regular";
    ThreeDObjectBold => "threeDObjectBold", "\u{f872}", "three-d-object-bold";
    ThreeDObjectLight => "threeDObjectLight", "\u{f873}", "three-d-object-light";
    ThreeDObjectRegular => "threeDObjectRegular", "\u{f874}", "three-d-object-regular";
    TooFastBold => "tooFastBold", "\u{f875}", "too-fast-bold";
    TooFastLight => "tooFastLight", "\u{f876}", "too-fast-light";
    TooFastRegular => "tooFastRegular", "\u{f877}", "too-fast-regular";
    TooSlowBold => "tooSlowBold", "\u{f878}", "too-slow-bold";
    TooSlowLight => "tooSlowLight", "\u{f879}", "too-slow-light";
    TooSlowRegular => "tooSlowRegular", "\u{f87a}", "too-slow-regular";
    ToolsBold => "toolsBold", "\u{f87b}", "tools-bold";
    ToolsLight => "toolsLight", "\u{f87c}", "tools-light";
    ToolsRegular => "toolsRegular", "\u{f87d}", "tools-regular";
    Touch10Bold => "touch10Bold", "\u{f87e}", "touch10-bold";
    Touch10Light => "touch10Light", "\u{f87f}", "touch10-light";
    Touch10Regular => "touch10Regular", "\u{f880}", "touch10-regular";
    TranscriptBold => "transcriptBold", "\u{f881}", "transcript-bold";
    TranscriptFilled => "transcriptFilled", "\u{f882}", "transcript-filled";
    TranscriptLight => "transcriptLight", "\u{f883}", "transcript-light";
    TranscriptRegular => "transcriptRegular", "\u{f884}", "transcript-regular";
    TrimBold => "trimBold", "\u{f885}", "trim-bold";
    TrimLight => "trimLight", "\u{f886}", "trim-light";
    TrimRegular => "trimRegular", "\u{f887}", "trim-regular";
    UcmCloudBold => "ucmCloudBold", "\u{f888}", "ucm-cloud-bold";
    UcmCloudLight => "ucmCloudLight", "\u{f889}", "ucm-cloud-light";
    UcmCloudRegular => "ucmCloudRegular", "\u{f88a}", "ucm-cloud-regular";
    UnderlineBold => "underlineBold", "\u{f88b}", "underline-bold";
    UnderlineLight => "underlineLight", "\u{f88c}", "underline-light";
    UnderlineRegular => "underlineRegular", "\u{f88d}", "underline-regular";
    UndoBold => "undoBold", "\u{f88e}", "undo-bold";
    UndoLight => "undoLight", "\u{f88f}", "undo-light";
    UndoRegular => "undoRegular", "\u{f890}", "undo-regular";
    UnlinkBold => "unlinkBold", "\u{f891}", "unlink-bold";
    UnlinkLight => "unlinkLight", "\u{f892}", "unlink-light";
    UnlinkRegular => "unlinkRegular", "\u{f893}", "unlink-regular";
    UnreadBold => "unreadBold", "\u{f894}", "unread-bold";
    UnreadFilled => "unreadFilled", "\u{f895}", "unread-filled";
    UnreadLight => "unreadLight", "\u{f896}", "unread-light";
    UnreadRegular => "unreadRegular", "\u{f897}", "unread-regular";
    UnsecureUnlockedBold => "unsecureUnlockedBold", "\u{f898}", "unsecure-unlocked-bold";
    UnsecureUnlockedFilled => "unsecureUnlockedFilled", "\u{f899}", "unsecure-unlocked-filled";
    UnsecureUnlockedLight => "unsecureUnlockedLight", "\u{f89a}", "unsecure-unlocked-light";
    UnsecureUnlockedRegular => "unsecureUnlockedRegular", "\u{f89b}", "unsecure-unlocked-regular";
    UnsortedBold => "unsortedBold", "\u{f89c}", "unsorted-bold";
    UnsortedLight => "unsortedLight", "\u{f89d}", "unsorted-light";
    UnsortedRegular => "unsortedRegular", "\u{f89e}", "unsorted-regular";
    UpdateFileShareBold => "updateFileShareBold", "\u{f89f}", "update-file-share-bold";
    UpdateFileShareLight => "updateFileShareLight", "\u{f8a0}", "update-file-share-light";
    UpdateFileShareRegular => "updateFileShareRegular", "\u{f8a1}", "update-file-share-regular";
    UpgradeBold => "upgradeBold", "\u{f8a2}", "upgrade-bold";
    UpgradeFilled => "upgradeFilled", "\u{f8a3}", "upgrade-filled";
    UpgradeLight => "upgradeLight", "\u{f8a4}", "upgrade-light";
    UpgradeRegular => "upgradeRegular", "\u{f8a5}", "upgrade-regular";
    UploadBold => "uploadBold", "\u{f8a6}", "upload-bold";
    UploadLight => "uploadLight", "\u{f8a7}", "upload-light";
    UploadRegular => "uploadRegular", "\u{f8a8}", "upload-regular";
    UsbBold => "usbBold", "\u{f8a9}", "usb-bold";
    UsbHeadsetBold => "usbHeadsetBold", "\u{f8aa}", "usb-headset-bold";
    UsbHeadsetLight => "usbHeadsetLight", "\u{f8ab}", "usb-headset-light";
    UsbHeadsetMutedBold => "usbHeadsetMutedBold", "\u{f8ac}", "usb-headset-muted-bold";
    UsbHeadsetMutedLight => "usbHeadsetMutedLight", "\u{f8ad}", "usb-headset-muted-light";
    UsbHeadsetMutedRegular => "usbHeadsetMutedRegular", "\u{f8ae}", "usb-headset-muted-regular";
    UsbHeadsetRegular => "usbHeadsetRegular", "\u{f8af}", "usb-headset-regular";
    UsbLight => "usbLight", "\u{f8b0}", "usb-light";
    UsbRegular => "usbRegular", "\u{f8b1}", "usb-regular";
    UserBold => "userBold", "\u{f8b2}", "user-bold";
    UserLight => "userLight", "\u{f8b3}", "user-light";
    UserRegular => "userRegular", "\u{f8b4}", "user-regular";
    VcsBold => "vcsBold", "\u{f8b5}", "vcs-bold";
    VcsLight => "vcsLight", "\u{f8b6}", "vcs-light";
    VcsRegular => "vcsRegular", "\u{f8b7}", "vcs-regular";
    VideoBlurBold => "videoBlurBold", "\u{f8b8}", "video-blur-bold";
    VideoBlurFilled => "videoBlurFilled", "\u{f8b9}", "video-blur-filled";
    VideoBlurLight => "videoBlurLight", "\u{f8ba}", "video-blur-light";
    VideoBlurRegular => "videoBlurRegular", "\u{f8bb}", "video-blur-regular";
    VideoBold => "videoBold", "\u{f8bc}", "video-bold";
    VideoEffectBold => "videoEffectBold", "\u{f8bd}", "video-effect-bold";
    VideoEffectFilled => "videoEffectFilled", "\u{f8be}", "video-effect-filled";
    VideoEffectLight => "videoEffectLight", "\u{f8bf}", "video-effect-light";
    VideoEffectRegular => "videoEffectRegular", "\u{f8c0}", "video-effect-regular";
    VideoFilled => "videoFilled", "\u{f8c1}", "video-filled";
    VideoLayoutBold => "videoLayoutBold", "\u{f8c2}", "video-layout-bold";
    VideoLayoutEqualBold => "videoLayoutEqualBold", "\u{f8c3}", "video-layout-equal-bold";
    VideoLayoutEqualDualBold => "videoLayoutEqualDualBold", "\u{f8c4}", "video-layout-equal-dual-bold";
    VideoLayoutEqualDualLight => "videoLayoutEqualDualLight", "\u{f8c5}", "video-layout-equal-dual-light";
    VideoLayoutEqualDualRegular => "videoLayoutEqualDualRegular", "\u{f8c6}", "video-layout-equal-dual-regular";
    VideoLayoutEqualFilled => "videoLayoutEqualFilled", "\u{f8c7}", "video-layout-equal-filled";
    VideoLayoutEqualLight => "videoLayoutEqualLight", "\u{f8c8}", "video-layout-equal-light";
    VideoLayoutEqualRegular => "videoLayoutEqualRegular", "\u{f8c9}", "video-layout-equal-regular";
    VideoLayoutLight => "videoLayoutLight", "\u{f8ca}", "video-layout-light";
    VideoLayoutOverlayBold => "videoLayoutOverlayBold", "\u{f8cb}", "video-layout-overlay-bold";
    VideoLayoutOverlayLight => "videoLayoutOverlayLight", "\u{f8cc}", "video-layout-overlay-light";
    VideoLayoutOverlayRegular => "videoLayoutOverlayRegular", "\u{f8cd}", "video-layout-overlay-regular";
    VideoLayoutPresenterDominantBold => "videoLayoutPresenterDominantBold", "\u{f8ce}", "video-layout-presenter-dominant-bold";
    VideoLayoutPresenterDominantLight => "videoLayoutPresenterDominantLight", "\u{f8cf}", "video-layout-presenter-dominant-light";
    VideoLayoutPresenterDominantRegular => "videoLayoutPresenterDominantRegular", "\u{f8d0}", "video-layout-presenter-dominant-regular";
    VideoLayoutProminentBold => "videoLayoutProminentBold", "\u{f8d1}", "video-layout-prominent-bold";
    VideoLayoutProminentLight => "videoLayoutProminentLight", "\u{f8d2}", "video-layout-prominent-light";
    VideoLayoutProminentRegular => "videoLayoutProminentRegular", "\u{f8d3}", "video-layout-prominent-regular";
    VideoLayoutRegular => "videoLayoutRegular", "\u{f8d4}", "video-layout-regular";
    VideoLayoutShareDominantBold => "videoLayoutShareDominantBold", "\u{f8d5}", "video-layout-share-dominant-bold";
    VideoLayoutShareDominantLight => "videoLayoutShareDominantLight", "\u{f8d6}", "video-layout-share-dominant-light";
    VideoLayoutShareDominantRegular => "videoLayoutShareDominantRegular", "\u{f8d7}", "video-layout-share-dominant-regular";
    VideoLayoutSingleBold => "videoLayoutSingleBold", "\u{f8d8}", "video-layout-single-bold";
    VideoLayoutSingleFilled => "videoLayoutSingleFilled", "\u{f8d9}", "video-layout-single-filled";
    VideoLayoutSingleLight => "videoLayoutSingleLight", "\u{f8da}", "video-layout-single-light";
    VideoLayoutSingleRegular => "videoLayoutSingleRegular", "\u{f8db}", "video-layout-single-regular";
    VideoLayoutStackBold => "videoLayoutStackBold", "\u{f8dc}", "video-layout-stack-bold";
    VideoLayoutStackFilled => "videoLayoutStackFilled", "\u{f8dd}", "video-layout-stack-filled";
    VideoLayoutStackLight => "videoLayoutStackLight", "\u{f8de}", "video-layout-stack-light";
    VideoLayoutStackRegular => "videoLayoutStackRegular", "\u{f8df}", "video-layout-stack-regular";
    VideoLayoutVideoDominantBold => "videoLayoutVideoDominantBold", "\u{f8e0}", "video-layout-video-dominant-bold";
    VideoLayoutVideoDominantLight => "videoLayoutVideoDominantLight", "\u{f8e1}", "video-layout-video-dominant-light";
    VideoLayoutVideoDominantRegular => "videoLayoutVideoDominantRegular", "\u{f8e2}", "video-layout-video-dominant-regular";
    VideoLight => "videoLight", "\u{f8e3}", "video-light";
    VideoPlusBold => "videoPlusBold", "\u{f8e4}", "video-plus-bold";
    VideoPlusFilled => "videoPlusFilled", "\u{f8e5}", "video-plus-filled";
    VideoPlusLight => "videoPlusLight", "\u{f8e6}", "video-plus-light";
    VideoPlusRegular => "videoPlusRegular", "\u{f8e7}", "video-plus-regular";
    VideoRegular => "videoRegular", "\u{f8e8}", "video-regular";
    VideoSpeakerTrackBold => "videoSpeakerTrackBold", "\u{f8e9}", "video-speaker-track-bold";
    VideoSpeakerTrackFilled => "videoSpeakerTrackFilled", "\u{f8ea}", "video-speaker-track-filled";
    VideoSpeakerTrackLight => "videoSpeakerTrackLight", "\u{f8eb}", "video-speaker-track-light";
    VideoSpeakerTrackRegular => "videoSpeakerTrackRegular", "\u{f8ec}", "video-speaker-track-regular";
    ViewAllBold => "viewAllBold", "\u{f8ed}", "view-all-bold";
    ViewAllLight => "viewAllLight", "\u{f8ee}", "view-all-light";
    ViewAllRegular => "viewAllRegular", "\u{f8ef}", "view-all-regular";
    ViewListBold => "viewListBold", "\u{f8f0}", "view-list-bold";
    ViewListLight => "viewListLight", "\u{f8f1}", "view-list-light";
    ViewListRegular => "viewListRegular", "\u{f8f2}", "view-list-regular";
    ViewStackedBold => "viewStackedBold", "\u{f8f3}", "view-stacked-bold";
    ViewStackedLight => "viewStackedLight", "\u{f8f4}", "view-stacked-light";
    ViewStackedRegular => "viewStackedRegular", "\u{f8f5}", "view-stacked-regular";
    ViewThumbnailBold => "viewThumbnailBold", "\u{f8f6}", "view-thumbnail-bold";
    ViewThumbnailFilled => "viewThumbnailFilled", "\u{f8f7}", "view-thumbnail-filled";
    ViewThumbnailLight => "viewThumbnailLight", "\u{f8f8}", "view-thumbnail-light";
    ViewThumbnailRegular => "viewThumbnailRegular", "\u{f8f9}", "view-thumbnail-regular";
    VoicemailBold => "voicemailBold", "\u{f8fa}", "voicemail-bold";
    VoicemailFilled => "voicemailFilled", "\u{f8fb}", "voicemail-filled";
    VoicemailLight => "voicemailLight", "\u{f8fc}", "voicemail-light";
    VoicemailRegular => "voicemailRegular", "\u{f8fd}", "voicemail-regular";
    WallpaperBold => "wallpaperBold", "\u{f8fe}", "wallpaper-bold";
    WallpaperLight => "wallpaperLight", "\u{f8ff}", "wallpaper-light";
    WallpaperRegular => "wallpaperRegular", "\u{f900}", "wallpaper-regular";
    WarningBadgeFilled => "warningBadgeFilled", "\u{f901}", "warning-badge-filled";
    WarningBold => "warningBold", "\u{f902}", "warning-bold";
    WarningFilled => "warningFilled", "\u{f903}", "warning-filled";
    WarningLight => "warningLight", "\u{f904}", "warning-light";
    WarningRegular => "warningRegular", "\u{f905}", "warning-regular";
    WebexBoardBold => "webexBoardBold", "\u{f906}", "webex-board-bold";
    WebexBoardLight => "webexBoardLight", "\u{f907}", "webex-board-light";
    WebexBoardRegular => "webexBoardRegular", "\u{f908}", "webex-board-regular";
    WebexCodecPlusBold => "webexCodecPlusBold", "\u{f909}", "webex-codec-plus-bold";
    WebexCodecPlusLight => "webexCodecPlusLight", "\u{f90a}", "webex-codec-plus-light";
    WebexCodecPlusRegular => "webexCodecPlusRegular", "\u{f90b}", "webex-codec-plus-regular";
    WebexDeskCameraBold => "webexDeskCameraBold", "\u{f90c}", "webex-desk-camera-bold";
    WebexDeskCameraLight => "webexDeskCameraLight", "\u{f90d}", "webex-desk-camera-light";
    WebexDeskCameraRegular => "webexDeskCameraRegular", "\u{f90e}", "webex-desk-camera-regular";
    WebexHelixFilled => "webexHelixFilled", "\u{f90f}", "webex-helix-filled";
    WebexMeetingsBold => "webexMeetingsBold", "\u{f910}", "webex-meetings-bold";
    WebexMeetingsFilled => "webexMeetingsFilled", "\u{f911}", "webex-meetings-filled";
    WebexMeetingsLight => "webexMeetingsLight", "\u{f912}", "webex-meetings-light";
    WebexMeetingsRegular => "webexMeetingsRegular", "\u{f913}", "webex-meetings-regular";
    WebexQuadCameraBold => "webexQuadCameraBold", "\u{f914}", "webex-quad-camera-bold";
    WebexQuadCameraLight => "webexQuadCameraLight", "\u{f915}", "webex-quad-camera-light";
    WebexQuadCameraRegular => "webexQuadCameraRegular", "\u{f916}", "webex-quad-camera-regular";
    WebexRoomKitBold => "webexRoomKitBold", "\u{f917}", "webex-room-kit-bold";
    WebexRoomKitLight => "webexRoomKitLight", "\u{f918}", "webex-room-kit-light";
    WebexRoomKitPlusBold => "webexRoomKitPlusBold", "\u{f919}", "webex-room-kit-plus-bold";
    WebexRoomKitPlusLight => "webexRoomKitPlusLight", "\u{f91a}", "webex-room-kit-plus-light";
    WebexRoomKitPlusRegular => "webexRoomKitPlusRegular", "\u{f91b}", "webex-room-kit-plus-regular";
    WebexRoomKitRegular => "webexRoomKitRegular", "\u{f91c}", "webex-room-kit-regular";
    WebexShareBold => "webexShareBold", "\u{f91d}", "webex-share-bold";
    WebexShareLight => "webexShareLight", "\u{f91e}", "webex-share-light";
    WebexShareRegular => "webexShareRegular", "\u{f91f}", "webex-share-regular";
    WebexTeamsBold => "webexTeamsBold", "\u{f920}", "webex-teams-bold";
    WebexTeamsFilled => "webexTeamsFilled", "\u{f921}", "webex-teams-filled";
    WebexTeamsLight => "webexTeamsLight", "\u{f922}", "webex-teams-light";
    WebexTeamsNewBold => "webexTeamsNewBold", "\u{f923}", "webex-teams-new-bold";
    WebexTeamsNewFilled => "webexTeamsNewFilled", "\u{f924}", "webex-teams-new-filled";
    WebexTeamsNewLight => "webexTeamsNewLight", "\u{f925}", "webex-teams-new-light";
    WebexTeamsNewRegular => "webexTeamsNewRegular", "\u{f926}", "webex-teams-new-regular";
    WebexTeamsRegular => "webexTeamsRegular", "\u{f927}", "webex-teams-regular";
    WhiteboardBold => "whiteboardBold", "\u{f928}", "whiteboard-bold";
    WhiteboardContentBold => "whiteboardContentBold", "\u{f929}", "whiteboard-content-bold";
    WhiteboardContentLight => "whiteboardContentLight", "\u{f92a}", "whiteboard-content-light";
    WhiteboardContentRegular => "whiteboardContentRegular", "\u{f92b}", "whiteboard-content-regular";
    WhiteboardFilled => "whiteboardFilled", "\u{f92c}", "whiteboard-filled";
    WhiteboardLight => "whiteboardLight", "\u{f92d}", "whiteboard-light";
    WhiteboardRegular => "whiteboardRegular", "\u{f92e}", "whiteboard-regular";
    WidgetBold => "widgetBold", "\u{f92f}", "widget-bold";
    WidgetFilled => "widgetFilled", "\u{f930}", "widget-filled";
    WidgetLight => "widgetLight", "\u{f931}", "widget-light";
    WidgetRegular => "widgetRegular", "\u{f932}", "widget-regular";
    WifiBold => "wifiBold", "\u{f933}", "wifi-bold";
    WifiErrorBold => "wifiErrorBold", "\u{f934}", "wifi-error-bold";
    WifiErrorLight => "wifiErrorLight", "\u{f935}", "wifi-error-light";
    WifiErrorRegular => "wifiErrorRegular", "\u{f936}", "wifi-error-regular";
    WifiLight => "wifiLight", "\u{f937}", "wifi-light";
    WifiRegular => "wifiRegular", "\u{f938}", "wifi-regular";
    WifiSignalGoodColoredBold => "wifiSignalGoodColoredBold", "\u{f939}", "wifi-signal-good-colored-bold";
    WifiSignalGoodColoredLight => "wifiSignalGoodColoredLight", "\u{f93a}", "wifi-signal-good-colored-light";
    WifiSignalGoodColoredRegular => "wifiSignalGoodColoredRegular", "\u{f93b}", "wifi-signal-good-colored-regular";
    WifiSignalPoorColoredBold => "wifiSignalPoorColoredBold", "\u{f93c}", "wifi-signal-poor-colored-bold";
    WifiSignalPoorColoredLight => "wifiSignalPoorColoredLight", "\u{f93d}", "wifi-signal-poor-colored-light";
    WifiSignalPoorColoredRegular => "wifiSignalPoorColoredRegular", "\u{f93e}", "wifi-signal-poor-colored-regular";
    WifiSignalUnstableColoredBold => "wifiSignalUnstableColoredBold", "\u{f93f}", "wifi-signal-unstable-colored-bold";
    WifiSignalUnstableColoredLight => "wifiSignalUnstableColoredLight", "\u{f940}", "wifi-signal-unstable-colored-light";
    WifiSignalUnstableColoredRegular => "wifiSignalUnstableColoredRegular", "\u{f941}", "wifi-signal-unstable-colored-regular";
    WindowCornerScrubBold => "windowCornerScrubBold", "\u{f942}", "window-corner-scrub-bold";
    WindowCornerScrubLight => "windowCornerScrubLight", "\u{f943}", "window-corner-scrub-light";
    WindowCornerScrubRegular => "windowCornerScrubRegular", "\u{f944}", "window-corner-scrub-regular";
    WindowRightCornerScrubBold => "windowRightCornerScrubBold", "\u{f945}", "window-right-corner-scrub-bold";
    WindowRightCornerScrubLight => "windowRightCornerScrubLight", "\u{f946}", "window-right-corner-scrub-light";
    WindowRightCornerScrubRegular => "windowRightCornerScrubRegular", "\u{f947}", "window-right-corner-scrub-regular";
    WindowVerticalScrubBold => "windowVerticalScrubBold", "\u{f948}", "window-vertical-scrub-bold";
    WindowVerticalScrubLight => "windowVerticalScrubLight", "\u{f949}", "window-vertical-scrub-light";
    WindowVerticalScrubRegular => "windowVerticalScrubRegular", "\u{f94a}", "window-vertical-scrub-regular";
    WorkphoneBold => "workphoneBold", "\u{f94b}", "workphone-bold";
    WorkphoneLight => "workphoneLight", "\u{f94c}", "workphone-light";
    WorkphoneRegular => "workphoneRegular", "\u{f94d}", "workphone-regular";
    ZoomInBold => "zoomInBold", "\u{f94e}", "zoom-in-bold";
    ZoomInLight => "zoomInLight", "\u{f94f}", "zoom-in-light";
    ZoomInRegular => "zoomInRegular", "\u{f950}", "zoom-in-regular";
    ZoomOutBold => "zoomOutBold", "\u{f951}", "zoom-out-bold";
    ZoomOutLight => "zoomOutLight", "\u{f952}", "zoom-out-light";
    ZoomOutRegular => "zoomOutRegular", "\u{f953}", "zoom-out-regular";
}
