<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Upload status text</description>
   <name>txt_UploadStatus</name>
   <tag></tag>
   <elementGuidId>upload-status-text</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//span[contains(@class, 'status') or contains(text(), 'Uploading') or contains(text(), 'Complete')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='upload-status'], .upload-status</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
